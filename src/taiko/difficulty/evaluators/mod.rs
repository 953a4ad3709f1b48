pub use self::stamina::StaminaEvaluator;

mod stamina;
