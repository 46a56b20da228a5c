//! Session progress log and summary statistics.
//!
//! The log lives only as long as the session that owns it. Statistics are
//! recomputed from the whole log on every query.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Largest number of hours that can be logged for one day.
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Whether anything has been logged yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Empty,
    HasEntries,
}

/// Append-only list of hours studied, one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    entries: Vec<f64>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ProgressState {
        if self.entries.is_empty() {
            ProgressState::Empty
        } else {
            ProgressState::HasEntries
        }
    }

    /// Record the hours studied for the next day.
    ///
    /// Range checking is the caller's job; see [`check_entry`].
    pub fn append(&mut self, hours: f64) {
        debug_assert!(check_entry(hours).is_ok(), "unchecked progress entry {hours}");
        self.entries.push(hours);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(day, hours)` pairs, days numbered from 1.
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied().enumerate().map(|(i, h)| (i + 1, h))
    }

    /// Summary against a daily target, or `None` while the log is empty.
    pub fn summary(&self, daily_budget: f64) -> Option<ProgressSummary> {
        if self.entries.is_empty() {
            return None;
        }
        let days = self.entries.len();
        let total: f64 = self.entries.iter().sum();
        let average = total / days as f64;
        let target_total = daily_budget * days as f64;
        Some(ProgressSummary {
            days_logged: days,
            total,
            average,
            target_achievement_percent: 100.0 * total / target_total,
            total_vs_target: total - target_total,
            average_vs_target: average - daily_budget,
        })
    }
}

/// Reject entries outside `[0, 24]` hours.
pub fn check_entry(hours: f64) -> Result<(), PlanError> {
    if !hours.is_finite() || !(0.0..=MAX_HOURS_PER_DAY).contains(&hours) {
        return Err(PlanError::invalid(format!(
            "hours studied must be between 0 and {MAX_HOURS_PER_DAY}, got {hours}"
        )));
    }
    Ok(())
}

/// Cumulative progress against the daily target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Number of entries in the log.
    pub days_logged: usize,
    /// Sum of all entries.
    pub total: f64,
    /// Mean hours per logged day.
    pub average: f64,
    /// Hours logged as a percentage of hours targeted.
    pub target_achievement_percent: f64,
    /// Hours logged minus hours targeted.
    pub total_vs_target: f64,
    /// Mean hours minus the daily target.
    pub average_vs_target: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_without_summary() {
        let log = ProgressLog::new();
        assert_eq!(log.state(), ProgressState::Empty);
        assert!(log.is_empty());
        assert!(log.summary(4.0).is_none());
    }

    #[test]
    fn two_entries_against_budget_of_four() {
        let mut log = ProgressLog::new();
        log.append(2.0);
        assert_eq!(log.state(), ProgressState::HasEntries);
        log.append(4.0);

        let s = log.summary(4.0).unwrap();
        assert_eq!(s.days_logged, 2);
        assert_eq!(s.total, 6.0);
        assert_eq!(s.average, 3.0);
        assert_eq!(s.target_achievement_percent, 75.0);
        assert_eq!(s.total_vs_target, -2.0);
        assert_eq!(s.average_vs_target, -1.0);
    }

    #[test]
    fn summary_is_recomputed_from_full_log() {
        let mut log = ProgressLog::new();
        log.append(1.0);
        assert_eq!(log.summary(2.0).unwrap().target_achievement_percent, 50.0);
        log.append(5.0);
        let s = log.summary(2.0).unwrap();
        assert_eq!(s.total, 6.0);
        assert_eq!(s.target_achievement_percent, 150.0);
    }

    #[test]
    fn zero_hour_days_count() {
        let mut log = ProgressLog::new();
        log.append(0.0);
        log.append(0.0);
        let s = log.summary(3.0).unwrap();
        assert_eq!(s.total, 0.0);
        assert_eq!(s.target_achievement_percent, 0.0);
        assert_eq!(log.state(), ProgressState::HasEntries);
    }

    #[test]
    fn entries_are_numbered_from_one() {
        let mut log = ProgressLog::new();
        log.append(1.5);
        log.append(2.5);
        let days: Vec<(usize, f64)> = log.entries().collect();
        assert_eq!(days, vec![(1, 1.5), (2, 2.5)]);
    }

    #[test]
    fn entry_range() {
        assert!(check_entry(0.0).is_ok());
        assert!(check_entry(24.0).is_ok());
        assert!(check_entry(7.5).is_ok());
        assert!(check_entry(-0.5).is_err());
        assert!(check_entry(24.5).is_err());
        assert!(check_entry(f64::INFINITY).is_err());
        assert!(check_entry(f64::NAN).is_err());
    }
}
