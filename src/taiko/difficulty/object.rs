use std::slice::Iter;

use crate::{
    model::hit_object::{HitColor, HitType, TaikoObject},
    taiko::{difficulty::key::Key, error::TimelineError},
};

/// A [`TaikoObject`] prepared for difficulty calculation.
///
/// All times are adjusted by the clock rate.
#[derive(Clone, Debug, PartialEq)]
pub struct TaikoDifficultyObject {
    /// Index among all difficulty objects.
    pub idx: usize,
    pub start_time: f64,
    /// Time since the previous chart object.
    pub delta_time: f64,
    pub base_hit_type: HitType,
    /// Index among all hits. `None` for non-hits.
    pub note_idx: Option<usize>,
    /// Index among hits of the same colour. `None` for non-hits.
    pub mono_idx: Option<usize>,
    pub key: Option<Key>,
    /// Index among hits of the same [`Key`]. `None` for non-hits.
    pub key_idx: Option<usize>,
}

impl TaikoDifficultyObject {
    pub const fn is_hit(&self) -> bool {
        self.base_hit_type.is_hit()
    }
}

/// All difficulty objects of a chart alongside the lists linking hits of the
/// same kind.
///
/// Every list only contains indices of objects that were pushed before, so
/// links can only ever point backwards. The type is immutable once created.
#[derive(Clone, Debug, Default)]
pub struct TaikoDifficultyObjects {
    objects: Vec<TaikoDifficultyObject>,
    note_objects: Vec<usize>,
    center_objects: Vec<usize>,
    rim_objects: Vec<usize>,
    key_objects: [Vec<usize>; Key::COUNT],
}

impl TaikoDifficultyObjects {
    /// Create difficulty objects for the given chart objects.
    ///
    /// The first chart object does not get a difficulty object because it
    /// lacks a previous object to measure from.
    pub fn new(hit_objects: &[TaikoObject], clock_rate: f64) -> Result<Self, TimelineError> {
        if !(clock_rate.is_finite() && clock_rate > 0.0) {
            return Err(TimelineError::InvalidClockRate(clock_rate));
        }

        validate_timeline(hit_objects)?;

        let mut this = Self::with_capacity(hit_objects.len().saturating_sub(1));

        for (last, curr) in hit_objects.iter().zip(hit_objects.iter().skip(1)) {
            this.push(curr, last, clock_rate);
        }

        Ok(this)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    fn push(&mut self, base: &TaikoObject, last: &TaikoObject, clock_rate: f64) {
        let idx = self.objects.len();

        let mut diff_object = TaikoDifficultyObject {
            idx,
            start_time: base.start_time / clock_rate,
            delta_time: (base.start_time - last.start_time) / clock_rate,
            base_hit_type: base.hit_type,
            note_idx: None,
            mono_idx: None,
            key: None,
            key_idx: None,
        };

        if let HitType::Hit(color) = base.hit_type {
            let mono_objects = self.mono_objects_mut(color);
            let mono_idx = mono_objects.len();
            mono_objects.push(idx);

            let key = Key::for_mono_idx(color, mono_idx);
            let key_objects = &mut self.key_objects[key.idx()];
            diff_object.key_idx = Some(key_objects.len());
            key_objects.push(idx);

            diff_object.note_idx = Some(self.note_objects.len());
            self.note_objects.push(idx);

            diff_object.mono_idx = Some(mono_idx);
            diff_object.key = Some(key);
        }

        self.objects.push(diff_object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&TaikoDifficultyObject> {
        self.objects.get(idx)
    }

    pub fn iter(&self) -> Iter<'_, TaikoDifficultyObject> {
        self.objects.iter()
    }

    pub fn as_slice(&self) -> &[TaikoDifficultyObject] {
        &self.objects
    }

    /// The object `backwards_idx + 1` positions before `curr`.
    pub fn previous(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        curr.idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| self.objects.get(idx))
    }

    /// The object `forwards_idx + 1` positions after `curr`.
    pub fn next(
        &self,
        curr: &TaikoDifficultyObject,
        forwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        self.objects.get(curr.idx + forwards_idx + 1)
    }

    /// The hit `backwards_idx + 1` hits before `curr`, regardless of colour.
    pub fn previous_note(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        let note_idx = curr.note_idx?.checked_sub(backwards_idx + 1)?;

        self.resolve(&self.note_objects, note_idx)
    }

    /// The hit `backwards_idx + 1` same-coloured hits before `curr`.
    pub fn previous_mono(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        let color = curr.base_hit_type.color()?;
        let mono_idx = curr.mono_idx?.checked_sub(backwards_idx + 1)?;

        self.resolve(self.mono_objects(color), mono_idx)
    }

    /// The `rank`-th most recent hit before `curr` that was played with the
    /// same [`Key`].
    ///
    /// A `rank` of 0 as well as ranks reaching past the start of the chart
    /// yield `None`.
    pub fn previous_of_same_partition(
        &self,
        curr: &TaikoDifficultyObject,
        rank: usize,
    ) -> Option<&TaikoDifficultyObject> {
        if rank == 0 {
            return None;
        }

        let key = curr.key?;
        let key_idx = curr.key_idx?.checked_sub(rank)?;

        self.resolve(&self.key_objects[key.idx()], key_idx)
    }

    fn resolve(&self, indices: &[usize], idx: usize) -> Option<&TaikoDifficultyObject> {
        indices.get(idx).and_then(|&idx| self.objects.get(idx))
    }

    fn mono_objects(&self, color: HitColor) -> &[usize] {
        match color {
            HitColor::Center => &self.center_objects,
            HitColor::Rim => &self.rim_objects,
        }
    }

    fn mono_objects_mut(&mut self, color: HitColor) -> &mut Vec<usize> {
        match color {
            HitColor::Center => &mut self.center_objects,
            HitColor::Rim => &mut self.rim_objects,
        }
    }
}

impl<'a> IntoIterator for &'a TaikoDifficultyObjects {
    type Item = &'a TaikoDifficultyObject;
    type IntoIter = Iter<'a, TaikoDifficultyObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_timeline(hit_objects: &[TaikoObject]) -> Result<(), TimelineError> {
    let mut prev_start_time = f64::NEG_INFINITY;

    for (idx, h) in hit_objects.iter().enumerate() {
        if !h.start_time.is_finite() {
            return Err(TimelineError::NonFiniteStartTime { idx });
        }

        if h.start_time < prev_start_time {
            return Err(TimelineError::Unsorted {
                idx,
                start_time: h.start_time,
                prev_start_time,
            });
        }

        prev_start_time = h.start_time;
    }

    Ok(())
}
