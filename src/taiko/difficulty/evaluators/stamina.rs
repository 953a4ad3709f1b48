use crate::taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects};

/// Evaluates the minimum mechanical stamina required to play an object.
///
/// Each colour is assumed to alternate between two keys so the relevant
/// interval is the one to the previous hit of the same key.
///
/// The calibration can only be created through [`StaminaEvaluator::new`] so
/// every evaluated value is finite and non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaminaEvaluator {
    base_strain: f64,
    speed_scale: f64,
    min_interval: f64,
}

impl StaminaEvaluator {
    /// With a 100ms key interval this yields a speed bonus of 0.6.
    pub const DEFAULT: Self = Self {
        base_strain: 0.5,
        speed_scale: 60.0,
        // Cap to 600bpm 1/4, 25ms note interval, 50ms key interval
        min_interval: 100.0,
    };

    /// Create an evaluator with custom calibration.
    ///
    /// Returns `None` if `base_strain` or `speed_scale` are negative or not
    /// finite, or if `min_interval` is not a positive finite number.
    pub fn new(base_strain: f64, speed_scale: f64, min_interval: f64) -> Option<Self> {
        let non_negative = |n: f64| n.is_finite() && n >= 0.0;

        if !(non_negative(base_strain)
            && non_negative(speed_scale)
            && min_interval.is_finite()
            && min_interval > 0.0)
        {
            return None;
        }

        Some(Self {
            base_strain,
            speed_scale,
            min_interval,
        })
    }

    /// Strain added to every hit with a same-key predecessor.
    pub const fn base_strain(&self) -> f64 {
        self.base_strain
    }

    /// Numerator of the speed bonus; in milliseconds.
    pub const fn speed_scale(&self) -> f64 {
        self.speed_scale
    }

    /// Intervals are raised to at least this value before the speed bonus
    /// is calculated; in milliseconds.
    pub const fn min_interval(&self) -> f64 {
        self.min_interval
    }

    pub fn evaluate_diff_of(
        &self,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        if !curr.base_hit_type.is_hit() {
            return 0.0;
        }

        // * Find the previous hit object hit by the current key, which is two notes of the same colour prior.
        let Some(key_prev) = objects.previous_of_same_partition(curr, 1) else {
            return 0.0;
        };

        // * Add a base strain to all objects
        self.base_strain + self.speed_bonus(curr.start_time - key_prev.start_time)
    }

    /// Applies a speed bonus dependent on the time since the last hit
    /// performed using the same key.
    pub fn speed_bonus(&self, interval: f64) -> f64 {
        // * This is a measure to prevent absurdly high speed maps giving infinity/negative values.
        let interval = f64::max(interval, self.min_interval);

        self.speed_scale / interval
    }
}

impl Default for StaminaEvaluator {
    fn default() -> Self {
        Self::DEFAULT
    }
}
