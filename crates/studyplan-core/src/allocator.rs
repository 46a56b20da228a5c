//! Difficulty-weighted allocation of the daily study budget.
//!
//! Each subject receives `weight / sum(weights)` of the budget. The hours
//! are kept unrounded so the rows always add back up to the budget; only
//! the display layer rounds.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::model::Allocation;

/// Split `daily_budget` hours across subjects proportionally to `weights`.
///
/// Output rows are in input order. Nothing is returned unless every input
/// check passes, so callers never see a partial table.
pub fn allocate(
    names: &[String],
    weights: &[u32],
    daily_budget: f64,
) -> Result<Vec<Allocation>, PlanError> {
    check_parallel(names, weights)?;
    if !daily_budget.is_finite() || daily_budget <= 0.0 {
        return Err(PlanError::invalid(format!(
            "daily budget must be a positive number of hours, got {daily_budget}"
        )));
    }
    if let Some(i) = weights.iter().position(|&w| w == 0) {
        return Err(PlanError::invalid(format!(
            "weight for '{}' must be positive",
            names[i]
        )));
    }

    // u64 so ten subjects of any u32 weight cannot overflow
    let total_weight: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total_weight == 0 {
        return Err(PlanError::invalid("total weight must be positive"));
    }

    let total = total_weight as f64;
    let rows = names
        .iter()
        .zip(weights)
        .map(|(name, &weight)| Allocation {
            subject: name.clone(),
            weight,
            hours: f64::from(weight) / total * daily_budget,
        })
        .collect();

    Ok(rows)
}

/// Name of the subject with the largest weight (the weakest subject).
///
/// Ties go to the first subject in input order.
pub fn weakest<'a>(names: &'a [String], weights: &[u32]) -> Result<&'a str, PlanError> {
    check_parallel(names, weights)?;
    let mut best = 0;
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w > weights[best] {
            best = i;
        }
    }
    Ok(&names[best])
}

/// Name of the subject with the smallest weight (the strongest subject).
///
/// Ties go to the first subject in input order.
pub fn strongest<'a>(names: &'a [String], weights: &[u32]) -> Result<&'a str, PlanError> {
    check_parallel(names, weights)?;
    let mut best = 0;
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w < weights[best] {
            best = i;
        }
    }
    Ok(&names[best])
}

fn check_parallel(names: &[String], weights: &[u32]) -> Result<(), PlanError> {
    if names.is_empty() || weights.is_empty() {
        return Err(PlanError::invalid("at least one subject is required"));
    }
    if names.len() != weights.len() {
        return Err(PlanError::invalid(format!(
            "got {} subject names but {} weights",
            names.len(),
            weights.len()
        )));
    }
    Ok(())
}

/// What to do about one end of the difficulty range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusRecommendation {
    /// Subject the advice is about.
    pub subject: String,
    /// Daily hours to put in.
    pub daily_hours: f64,
    /// One-line study advice.
    pub advice: String,
}

impl FocusRecommendation {
    /// Primary focus: the weakest subject at the largest allocation.
    pub fn primary_focus(subject: &str, allocations: &[Allocation]) -> Self {
        let daily_hours = allocations
            .iter()
            .map(|a| a.hours)
            .fold(f64::NEG_INFINITY, f64::max);
        Self {
            subject: subject.to_string(),
            daily_hours: daily_hours.max(0.0),
            advice: "Focus on fundamentals and practice problems".into(),
        }
    }

    /// Maintain strength: the strongest subject at the smallest allocation.
    pub fn maintain_strength(subject: &str, allocations: &[Allocation]) -> Self {
        let daily_hours = allocations
            .iter()
            .map(|a| a.hours)
            .fold(f64::INFINITY, f64::min);
        Self {
            subject: subject.to_string(),
            daily_hours: if daily_hours.is_finite() { daily_hours } else { 0.0 },
            advice: "Regular revision and advanced topics".into(),
        }
    }
}
