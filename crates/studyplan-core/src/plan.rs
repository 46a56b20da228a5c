//! Study plan record with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocator::FocusRecommendation;
use crate::model::Allocation;
use crate::predictor::Prediction;
use crate::schedule::{total_study_hours, Urgency};

/// The result of one planning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Unique plan identifier.
    pub id: Uuid,
    /// When the plan was generated.
    pub created_at: DateTime<Utc>,
    /// Optional label from the subject set file.
    #[serde(default)]
    pub name: Option<String>,
    /// The day the plan was computed for.
    pub today: NaiveDate,
    /// Exam date as entered.
    pub exam_date: NaiveDate,
    /// Whole days until the exam, floored at 1.
    pub days_remaining: i64,
    /// Daily study budget in hours.
    pub daily_hours: u32,
    /// Per-subject allocation in input order.
    pub allocations: Vec<Allocation>,
    /// Advice for the weakest subject.
    pub primary_focus: FocusRecommendation,
    /// Advice for the strongest subject.
    pub maintain_strength: FocusRecommendation,
    /// Predicted score, or `None` if the predictor was unavailable.
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

impl StudyPlan {
    pub fn subject_count(&self) -> usize {
        self.allocations.len()
    }

    /// Sum of the unrounded allocations. Equals `daily_hours` up to float error.
    pub fn total_daily_hours(&self) -> f64 {
        self.allocations.iter().map(|a| a.hours).sum()
    }

    pub fn average_hours_per_subject(&self) -> f64 {
        if self.allocations.is_empty() {
            return 0.0;
        }
        self.total_daily_hours() / self.allocations.len() as f64
    }

    pub fn total_study_hours(&self) -> i64 {
        total_study_hours(self.daily_hours, self.days_remaining)
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_days(self.days_remaining)
    }

    /// Base file name for exports, e.g. `study_plan_20261016`.
    pub fn file_stem(&self) -> String {
        format!("study_plan_{}", self.today.format("%Y%m%d"))
    }

    /// Save the plan as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize plan")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write plan to {}", path.display()))?;
        Ok(())
    }

    /// Load a plan from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan from {}", path.display()))?;
        let plan: StudyPlan =
            serde_json::from_str(&content).context("failed to parse plan JSON")?;
        Ok(plan)
    }
}
