//! Planning error types.
//!
//! Only two things can go wrong inside the core: the caller hands over
//! input that cannot be planned, or the score predictor cannot be trained.
//! The engine degrades the second one instead of failing the plan.

use thiserror::Error;

/// Errors produced by the planning core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The subject set, budget, or progress entry was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The predictor could not be trained or evaluated.
    #[error("prediction unavailable: {0}")]
    PredictionUnavailable(String),
}

impl PlanError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PlanError::InvalidInput(message.into())
    }

    /// Returns `true` if the rest of a plan can still be rendered.
    pub fn is_degradable(&self) -> bool {
        matches!(self, PlanError::PredictionUnavailable(_))
    }
}
