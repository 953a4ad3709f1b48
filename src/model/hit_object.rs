use rosu_map::section::hit_objects::{HitObject, HitObjectKind};

pub use rosu_map::section::hit_objects::hit_samples::HitSoundType;

/// The colour of a drum hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitColor {
    /// Don
    Center,
    /// Kat
    Rim,
}

impl HitColor {
    /// The colour a circle with the given hitsound is played with.
    pub fn from_sound(sound: HitSoundType) -> Self {
        if sound.has_flag(HitSoundType::CLAP | HitSoundType::WHISTLE) {
            Self::Rim
        } else {
            Self::Center
        }
    }
}

/// Classification of a [`TaikoObject`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitType {
    Hit(HitColor),
    /// Drum rolls and swells.
    NonHit,
}

impl HitType {
    /// Whether the object requires a single strike i.e. it is a circle.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub const fn color(self) -> Option<HitColor> {
        match self {
            Self::Hit(color) => Some(color),
            Self::NonHit => None,
        }
    }
}

/// A hitobject as seen by osu!taiko difficulty calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TaikoObject {
    pub start_time: f64,
    pub hit_type: HitType,
}

impl TaikoObject {
    pub const fn new(start_time: f64, hit_type: HitType) -> Self {
        Self {
            start_time,
            hit_type,
        }
    }

    pub const fn center(start_time: f64) -> Self {
        Self::new(start_time, HitType::Hit(HitColor::Center))
    }

    pub const fn rim(start_time: f64) -> Self {
        Self::new(start_time, HitType::Hit(HitColor::Rim))
    }

    pub const fn non_hit(start_time: f64) -> Self {
        Self::new(start_time, HitType::NonHit)
    }

    /// Create a [`TaikoObject`] from a parsed hitobject of a taiko map.
    pub fn from_hit_object(h: &HitObject) -> Self {
        let hit_type = match h.kind {
            HitObjectKind::Circle(_) => {
                HitType::Hit(HitColor::from_sound(HitSoundType::from(h.samples.as_slice())))
            }
            // Drum rolls and swells
            _ => HitType::NonHit,
        };

        Self::new(h.start_time, hit_type)
    }

    pub const fn is_hit(&self) -> bool {
        self.hit_type.is_hit()
    }
}
