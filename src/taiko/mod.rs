use std::{iter::Copied, num::NonZeroU64, slice::Iter};

use rosu_map::Beatmap;

use crate::model::{beatmap, hit_object::TaikoObject, mods::Mods};

use self::difficulty::{
    evaluators::StaminaEvaluator, object::TaikoDifficultyObjects, DifficultyValues,
};

pub use self::error::{StaminaError, TimelineError};

pub mod difficulty;

mod error;

/// Stamina calculator on osu!taiko maps.
///
/// # Example
///
/// ```
/// use rosu_taiko_stamina::{model::hit_object::TaikoObject, taiko::TaikoStamina};
///
/// let objects = [
///     TaikoObject::center(0.0),
///     TaikoObject::center(100.0),
///     TaikoObject::center(200.0),
///     TaikoObject::center(300.0),
/// ];
///
/// let values = TaikoStamina::new()
///     .mods(64_u32) // DT
///     .calculate_objects(&objects)
///     .unwrap();
///
/// assert_eq!(values.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct TaikoStamina {
    mods_clock_rate: f64,
    passed_objects: Option<u32>,
    /// Clock rate will be clamped internally between 0.01 and 100.0.
    ///
    /// Since its minimum value is 0.01, its bits are never zero.
    ///
    /// This allows for an optimization to reduce the struct size by storing its
    /// bits as a [`NonZeroU64`].
    clock_rate: Option<NonZeroU64>,
    evaluator: StaminaEvaluator,
}

impl TaikoStamina {
    /// Create a new stamina calculator.
    pub const fn new() -> Self {
        Self {
            mods_clock_rate: 1.0,
            passed_objects: None,
            clock_rate: None,
            evaluator: StaminaEvaluator::DEFAULT,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Mods) -> Self {
        Self {
            mods_clock_rate: mods.clock_rate(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        if clock_rate.is_nan() {
            return self;
        }

        let clock_rate = clock_rate.clamp(0.01, 100.0).to_bits();

        // The minimum value is 0.01 so its bits can never be fully zero.
        Self {
            clock_rate: NonZeroU64::new(clock_rate),
            ..self
        }
    }

    /// Use a custom calibration of the [`StaminaEvaluator`].
    pub const fn evaluator(mut self, evaluator: StaminaEvaluator) -> Self {
        self.evaluator = evaluator;

        self
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate
            .map_or(self.mods_clock_rate, non_zero_u64_to_f64)
    }

    pub const fn get_passed_objects(&self) -> usize {
        match self.passed_objects {
            Some(passed_objects) => passed_objects as usize,
            None => usize::MAX,
        }
    }

    pub const fn get_evaluator(&self) -> &StaminaEvaluator {
        &self.evaluator
    }

    /// Create the difficulty objects of the given chart objects.
    pub fn difficulty_objects(
        &self,
        hit_objects: &[TaikoObject],
    ) -> Result<TaikoDifficultyObjects, TimelineError> {
        TaikoDifficultyObjects::new(self.passed(hit_objects), self.get_clock_rate())
    }

    /// Calculate the stamina value of each difficulty object of the given
    /// chart objects.
    ///
    /// The chart objects must be sorted by their start time.
    pub fn calculate_objects(
        &self,
        hit_objects: &[TaikoObject],
    ) -> Result<StaminaValues, TimelineError> {
        let hit_objects = self.passed(hit_objects);
        let clock_rate = self.get_clock_rate();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n_objects = hit_objects.len(),
            clock_rate,
            "calculating stamina values"
        );

        let res = DifficultyValues::calculate(hit_objects, clock_rate, &self.evaluator);

        #[cfg(feature = "tracing")]
        if let Err(ref err) = res {
            tracing::warn!(%err, "rejected object timeline");
        }

        res.map(|values| values.stamina)
    }

    /// Calculate the stamina value of each difficulty object of an
    /// osu!taiko map.
    pub fn calculate(&self, map: &Beatmap) -> Result<StaminaValues, StaminaError> {
        let hit_objects = beatmap::taiko_objects(map)?;

        self.calculate_objects(&hit_objects)
            .map_err(StaminaError::from)
    }

    /// Parse the content of a `.osu` file and calculate the stamina value of
    /// each difficulty object.
    pub fn calculate_bytes(&self, bytes: &[u8]) -> Result<StaminaValues, StaminaError> {
        let map = beatmap::parse_bytes(bytes)?;

        self.calculate(&map)
    }

    fn passed<'h>(&self, hit_objects: &'h [TaikoObject]) -> &'h [TaikoObject] {
        let take = self.get_passed_objects().min(hit_objects.len());

        &hit_objects[..take]
    }
}

impl Default for TaikoStamina {
    fn default() -> Self {
        Self::new()
    }
}

fn non_zero_u64_to_f64(n: NonZeroU64) -> f64 {
    f64::from_bits(n.get())
}

/// The stamina value of each difficulty object.
///
/// The value at index `i` belongs to the difficulty object with
/// [`idx`] `i`.
///
/// [`idx`]: difficulty::object::TaikoDifficultyObject::idx
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaminaValues {
    pub values: Vec<f64>,
}

impl StaminaValues {
    pub(crate) const fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    pub fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.values.iter().copied()
    }

    /// The highest value or `0.0` if there are none.
    pub fn max(&self) -> f64 {
        self.iter().fold(0.0, f64::max)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}
