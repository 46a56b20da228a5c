//! The planning capability consumed by the CLI and the exports.
//!
//! Rendering code only ever sees the records this trait returns, so the
//! presentation side can be swapped without touching the arithmetic.

use crate::error::PlanError;
use crate::model::Allocation;
use crate::predictor::Prediction;
use crate::progress::{ProgressLog, ProgressSummary};

/// Allocation, prediction, and progress tracking behind one interface.
pub trait PlanningEngine {
    /// Split the daily budget across subjects by weight.
    fn allocate(
        &self,
        names: &[String],
        weights: &[u32],
        daily_budget: f64,
    ) -> Result<Vec<Allocation>, PlanError>;

    /// Predict an expected score. Fails with `PredictionUnavailable` when
    /// the model cannot be trained.
    fn predict(
        &self,
        daily_hours: f64,
        days_remaining: f64,
        avg_difficulty: f64,
    ) -> Result<Prediction, PlanError>;

    /// Validate and append one day's hours to `log`, returning the updated
    /// summary against `daily_budget`.
    fn track_progress(
        &self,
        log: &mut ProgressLog,
        hours: f64,
        daily_budget: f64,
    ) -> Result<ProgressSummary, PlanError>;
}
