//! TOML subject set parser.
//!
//! Loads subject sets from TOML files and validates them. Subjects whose
//! name is blank are dropped here and never reach the planner.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{
    Difficulty, PlanRequest, Subject, MAX_DAILY_HOURS, MAX_SUBJECTS, MIN_DAILY_HOURS,
};

/// Intermediate TOML structure for parsing subject set files.
#[derive(Debug, Deserialize)]
struct TomlSubjectFile {
    #[serde(default)]
    plan: TomlPlanHeader,
    #[serde(default)]
    subjects: Vec<TomlSubject>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlPlanHeader {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    daily_hours: Option<u32>,
    #[serde(default)]
    exam_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlSubject {
    #[serde(default)]
    name: String,
    #[serde(default = "default_difficulty")]
    difficulty: String,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// A parsed subject set file.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSet {
    /// Optional label for the plan.
    pub name: Option<String>,
    /// Daily budget, if the file sets one.
    pub daily_hours: Option<u32>,
    /// Exam date, if the file sets one.
    pub exam_date: Option<NaiveDate>,
    /// Subjects with non-blank names, in file order.
    pub subjects: Vec<Subject>,
    /// How many entries were dropped for having a blank name.
    pub skipped_blank: usize,
}

impl SubjectSet {
    /// Fill in missing fields and produce a plan request.
    pub fn into_request(self, daily_hours: u32, exam_date: NaiveDate) -> PlanRequest {
        PlanRequest {
            subjects: self.subjects,
            daily_hours: self.daily_hours.unwrap_or(daily_hours),
            exam_date: self.exam_date.unwrap_or(exam_date),
        }
    }
}

/// Parse a single TOML file into a `SubjectSet`.
pub fn parse_subject_set(path: &Path) -> Result<SubjectSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read subject set file: {}", path.display()))?;

    parse_subject_set_str(&content, path)
}

/// Parse a TOML string into a `SubjectSet` (useful for testing).
pub fn parse_subject_set_str(content: &str, source_path: &Path) -> Result<SubjectSet> {
    let parsed: TomlSubjectFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let exam_date = parsed
        .plan
        .exam_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .with_context(|| format!("invalid exam_date in {}", source_path.display()))?;

    let mut skipped_blank = 0;
    let mut subjects = Vec::with_capacity(parsed.subjects.len());
    for (i, s) in parsed.subjects.into_iter().enumerate() {
        let name = s.name.trim();
        if name.is_empty() {
            tracing::debug!("skipping subject {} with a blank name", i + 1);
            skipped_blank += 1;
            continue;
        }
        let difficulty: Difficulty = s
            .difficulty
            .parse()
            .map_err(|e: String| anyhow::anyhow!("subject '{name}': {e}"))?;
        subjects.push(Subject::new(name, difficulty));
    }

    Ok(SubjectSet {
        name: parsed.plan.name,
        daily_hours: parsed.plan.daily_hours,
        exam_date,
        subjects,
        skipped_blank,
    })
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("expected a date like 2026-12-01, got '{s}'"))
}

/// Parse a `NAME:LEVEL` pair such as `Mathematics:weak`.
///
/// The level defaults to medium when omitted. Returns `Ok(None)` for a
/// blank name.
pub fn parse_subject_arg(arg: &str) -> Result<Option<Subject>> {
    let (name, level) = match arg.rsplit_once(':') {
        Some((name, level)) => (name, Some(level)),
        None => (arg, None),
    };
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    let difficulty = match level {
        Some(level) => level
            .parse()
            .map_err(|e: String| anyhow::anyhow!("subject '{name}': {e}"))?,
        None => Difficulty::Medium,
    };
    Ok(Some(Subject::new(name, difficulty)))
}

/// A warning from subject set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The subject name (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a subject set for common issues.
pub fn validate_subject_set(set: &SubjectSet, today: NaiveDate) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.subjects.is_empty() {
        warnings.push(ValidationWarning {
            subject: None,
            message: "no subjects with a name; a plan cannot be generated".into(),
        });
    }

    if set.subjects.len() > MAX_SUBJECTS {
        warnings.push(ValidationWarning {
            subject: None,
            message: format!(
                "{} subjects listed, at most {MAX_SUBJECTS} are supported",
                set.subjects.len()
            ),
        });
    }

    if set.skipped_blank > 0 {
        warnings.push(ValidationWarning {
            subject: None,
            message: format!(
                "{} subject(s) with a blank name will be skipped",
                set.skipped_blank
            ),
        });
    }

    // Check for duplicate subject names
    let mut seen = std::collections::HashSet::new();
    for s in &set.subjects {
        if !seen.insert(s.name.to_lowercase()) {
            warnings.push(ValidationWarning {
                subject: Some(s.name.clone()),
                message: format!("duplicate subject: {}", s.name),
            });
        }
    }

    if let Some(hours) = set.daily_hours {
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&hours) {
            warnings.push(ValidationWarning {
                subject: None,
                message: format!(
                    "daily_hours is {hours}, must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}"
                ),
            });
        }
    }

    if let Some(exam) = set.exam_date {
        if exam < today {
            warnings.push(ValidationWarning {
                subject: None,
                message: format!("exam date {exam} is in the past; 1 day will be assumed"),
            });
        }
    }

    warnings
}
