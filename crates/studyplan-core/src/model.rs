//! Core data model types for studyplan.
//!
//! These are the types the engine, the exports, and the CLI pass between
//! each other: subjects and their difficulty, the per-subject allocation,
//! and the request that drives a planning pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Maximum number of subjects accepted in one plan.
pub const MAX_SUBJECTS: usize = 10;

/// Bounds on the daily study budget, in whole hours.
pub const MIN_DAILY_HOURS: u32 = 1;
pub const MAX_DAILY_HOURS: u32 = 24;

/// Self-rated proficiency for a subject.
///
/// The numeric weight is inverted: a *weak* subject carries the largest
/// weight and therefore receives the largest share of the daily budget.
/// Everything that picks "the weakest subject" relies on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Weak,
    Medium,
    Strong,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Weak, Difficulty::Medium, Difficulty::Strong];

    /// Allocation weight: 3 = weak, 2 = medium, 1 = strong.
    pub fn weight(self) -> u32 {
        match self {
            Difficulty::Weak => 3,
            Difficulty::Medium => 2,
            Difficulty::Strong => 1,
        }
    }

    /// Inverse of [`Difficulty::weight`].
    pub fn from_weight(weight: u32) -> Option<Self> {
        match weight {
            3 => Some(Difficulty::Weak),
            2 => Some(Difficulty::Medium),
            1 => Some(Difficulty::Strong),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Weak => write!(f, "Weak"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Strong => write!(f, "Strong"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weak" | "3" => Ok(Difficulty::Weak),
            "medium" | "2" => Ok(Difficulty::Medium),
            "strong" | "1" => Ok(Difficulty::Strong),
            other => Err(format!(
                "unknown difficulty: {other} (expected weak, medium, or strong)"
            )),
        }
    }
}

/// A subject to study and how comfortable the student is with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub difficulty: Difficulty,
}

impl Subject {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }
}

/// One row of the allocation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Subject name.
    pub subject: String,
    /// Difficulty weight the share was computed from.
    pub weight: u32,
    /// Unrounded daily hours. Use [`Allocation::display_hours`] for output.
    pub hours: f64,
}

impl Allocation {
    /// Hours rounded to two decimal places.
    pub fn display_hours(&self) -> f64 {
        round2(self.hours)
    }

    /// The difficulty label for this row's weight, if it is one of 1..=3.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_weight(self.weight)
    }
}

/// Everything a planning pass needs from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Subjects in the order they should appear in the plan.
    pub subjects: Vec<Subject>,
    /// Daily study budget in hours.
    pub daily_hours: u32,
    /// Date of the exam.
    pub exam_date: NaiveDate,
}

impl PlanRequest {
    /// Check the request against the input bounds.
    ///
    /// Blank subject names are expected to be filtered out before this point;
    /// one that slips through is rejected rather than planned.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.subjects.is_empty() {
            return Err(PlanError::invalid(
                "please enter at least one subject name to generate a study plan",
            ));
        }
        if self.subjects.len() > MAX_SUBJECTS {
            return Err(PlanError::invalid(format!(
                "at most {MAX_SUBJECTS} subjects are supported, got {}",
                self.subjects.len()
            )));
        }
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(PlanError::invalid(format!(
                "daily study hours must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}, got {}",
                self.daily_hours
            )));
        }
        if let Some(blank) = self.subjects.iter().position(|s| s.name.trim().is_empty()) {
            return Err(PlanError::invalid(format!(
                "subject {} has an empty name",
                blank + 1
            )));
        }
        Ok(())
    }

    /// Subject names in input order.
    pub fn names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }

    /// Difficulty weights in input order.
    pub fn weights(&self) -> Vec<u32> {
        self.subjects.iter().map(|s| s.difficulty.weight()).collect()
    }
}

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
