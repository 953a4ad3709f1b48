use crate::{
    model::hit_object::TaikoObject,
    taiko::{error::TimelineError, StaminaValues},
};

use self::{evaluators::StaminaEvaluator, object::TaikoDifficultyObjects};

pub mod evaluators;
pub mod key;
pub mod object;

pub(crate) struct DifficultyValues {
    pub(crate) stamina: StaminaValues,
}

impl DifficultyValues {
    pub(crate) fn calculate(
        hit_objects: &[TaikoObject],
        clock_rate: f64,
        evaluator: &StaminaEvaluator,
    ) -> Result<Self, TimelineError> {
        let objects = TaikoDifficultyObjects::new(hit_objects, clock_rate)?;
        let stamina = Self::evaluate(&objects, evaluator);

        Ok(Self { stamina })
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate(objects: &TaikoDifficultyObjects, evaluator: &StaminaEvaluator) -> StaminaValues {
        let values = objects
            .iter()
            .map(|curr| evaluator.evaluate_diff_of(curr, objects))
            .collect();

        StaminaValues::new(values)
    }

    #[cfg(feature = "parallel")]
    fn evaluate(objects: &TaikoDifficultyObjects, evaluator: &StaminaEvaluator) -> StaminaValues {
        use rayon::prelude::*;

        let values = objects
            .as_slice()
            .par_iter()
            .map(|curr| evaluator.evaluate_diff_of(curr, objects))
            .collect();

        StaminaValues::new(values)
    }
}
