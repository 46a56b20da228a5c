//! Planning engine.
//!
//! One synchronous pass per request: allocate, pick the focus subjects,
//! count the days, predict. A predictor failure never fails the plan; the
//! prediction is simply left out.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::allocator::{self, FocusRecommendation};
use crate::error::PlanError;
use crate::model::{Allocation, PlanRequest};
use crate::plan::StudyPlan;
use crate::predictor::{LinearModel, Prediction, PredictorConfig};
use crate::progress::{check_entry, ProgressLog, ProgressSummary};
use crate::schedule::days_remaining;
use crate::traits::PlanningEngine;

/// The default [`PlanningEngine`].
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    predictor: PredictorConfig,
}

impl StudyPlanner {
    pub fn new(predictor: PredictorConfig) -> Self {
        Self { predictor }
    }

    pub fn predictor_config(&self) -> &PredictorConfig {
        &self.predictor
    }

    /// Build a full plan for `request` as of `today`.
    ///
    /// Fails only with `InvalidInput`; nothing is produced in that case.
    pub fn plan(&self, request: &PlanRequest, today: NaiveDate) -> Result<StudyPlan, PlanError> {
        request.validate()?;

        let names = request.names();
        let weights = request.weights();
        let daily_budget = f64::from(request.daily_hours);

        let allocations = self.allocate(&names, &weights, daily_budget)?;
        let weakest = allocator::weakest(&names, &weights)?;
        let strongest = allocator::strongest(&names, &weights)?;
        let days = days_remaining(request.exam_date, today);

        let avg_difficulty =
            weights.iter().map(|&w| f64::from(w)).sum::<f64>() / weights.len() as f64;
        let prediction = match self.predict(daily_budget, days as f64, avg_difficulty) {
            Ok(p) => Some(p),
            Err(e) if e.is_degradable() => {
                tracing::warn!("{e}; continuing without a score prediction");
                None
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            subjects = allocations.len(),
            days_remaining = days,
            weakest,
            "study plan generated"
        );

        Ok(StudyPlan {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            name: None,
            today,
            exam_date: request.exam_date,
            days_remaining: days,
            daily_hours: request.daily_hours,
            primary_focus: FocusRecommendation::primary_focus(weakest, &allocations),
            maintain_strength: FocusRecommendation::maintain_strength(strongest, &allocations),
            allocations,
            prediction,
        })
    }
}

impl PlanningEngine for StudyPlanner {
    fn allocate(
        &self,
        names: &[String],
        weights: &[u32],
        daily_budget: f64,
    ) -> Result<Vec<Allocation>, PlanError> {
        allocator::allocate(names, weights, daily_budget)
    }

    fn predict(
        &self,
        daily_hours: f64,
        days_remaining: f64,
        avg_difficulty: f64,
    ) -> Result<Prediction, PlanError> {
        // Retrained on every call; the fit is small and seeded.
        let model = LinearModel::train(&self.predictor)?;
        let score = model.predict(daily_hours, days_remaining, avg_difficulty);
        if !score.is_finite() {
            return Err(PlanError::PredictionUnavailable(format!(
                "model produced a non-finite score for ({daily_hours}, {days_remaining}, {avg_difficulty})"
            )));
        }
        Ok(Prediction::new(score))
    }

    fn track_progress(
        &self,
        log: &mut ProgressLog,
        hours: f64,
        daily_budget: f64,
    ) -> Result<ProgressSummary, PlanError> {
        check_entry(hours)?;
        if !daily_budget.is_finite() || daily_budget <= 0.0 {
            return Err(PlanError::invalid(format!(
                "daily target must be a positive number of hours, got {daily_budget}"
            )));
        }
        log.append(hours);
        tracing::debug!(day = log.len(), hours, "progress entry added");
        log.summary(daily_budget)
            .ok_or_else(|| PlanError::invalid("progress log is empty"))
    }
}
