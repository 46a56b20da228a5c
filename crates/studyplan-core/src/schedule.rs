//! Day counting between today and the exam.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this many days the plan is flagged as urgent.
pub const URGENT_DAYS: i64 = 7;

/// Whole days until the exam, never less than 1.
///
/// An exam today or in the past still counts as one day so that anything
/// dividing by or multiplying with the result stays meaningful.
pub fn days_remaining(exam_date: NaiveDate, today: NaiveDate) -> i64 {
    (exam_date - today).num_days().max(1)
}

/// Total hours available before the exam at the given daily budget.
pub fn total_study_hours(daily_hours: u32, days_remaining: i64) -> i64 {
    i64::from(daily_hours) * days_remaining
}

/// How close the exam is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    OnTrack,
}

impl Urgency {
    pub fn from_days(days_remaining: i64) -> Self {
        if days_remaining < URGENT_DAYS {
            Urgency::Urgent
        } else {
            Urgency::OnTrack
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Urgent => write!(f, "Urgent"),
            Urgency::OnTrack => write!(f, "On track"),
        }
    }
}
