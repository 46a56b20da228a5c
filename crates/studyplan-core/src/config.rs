//! studyplan configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{MAX_DAILY_HOURS, MIN_DAILY_HOURS};
use crate::predictor::PredictorConfig;

/// Environment variable that overrides `daily_hours`.
pub const DAILY_HOURS_ENV: &str = "STUDYPLAN_DAILY_HOURS";

/// Largest accepted `default_exam_offset_days` (ten years).
pub const MAX_EXAM_OFFSET_DAYS: i64 = 3650;

/// Top-level studyplan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanConfig {
    /// Daily study budget used when the subject set does not set one.
    #[serde(default = "default_daily_hours")]
    pub daily_hours: u32,
    /// Days from today to assume for the exam when no date is given.
    #[serde(default = "default_exam_offset")]
    pub default_exam_offset_days: i64,
    /// Output directory for exports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Export formats written by `plan` when `--format` is not given.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Performance predictor settings.
    #[serde(default)]
    pub predictor: PredictorConfig,
}

fn default_daily_hours() -> u32 {
    4
}
fn default_exam_offset() -> i64 {
    30
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./studyplan-output")
}
fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

impl Default for StudyPlanConfig {
    fn default() -> Self {
        Self {
            daily_hours: default_daily_hours(),
            default_exam_offset_days: default_exam_offset(),
            output_dir: default_output_dir(),
            formats: default_formats(),
            predictor: PredictorConfig::default(),
        }
    }
}

impl StudyPlanConfig {
    /// Reject values that parse but cannot be planned with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours),
            "daily_hours must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}, got {}",
            self.daily_hours
        );
        anyhow::ensure!(
            (0..=MAX_EXAM_OFFSET_DAYS).contains(&self.default_exam_offset_days),
            "default_exam_offset_days must be between 0 and {MAX_EXAM_OFFSET_DAYS}, got {}",
            self.default_exam_offset_days
        );
        Ok(())
    }

    /// Exam date assumed when neither the subject set nor the command line
    /// gives one.
    pub fn default_exam_date(&self, today: NaiveDate) -> Result<NaiveDate> {
        Duration::try_days(self.default_exam_offset_days)
            .and_then(|offset| today.checked_add_signed(offset))
            .context("default_exam_offset_days out of range")
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studyplan.toml` in the current directory
/// 2. `~/.config/studyplan/config.toml`
///
/// Environment variable override: `STUDYPLAN_DAILY_HOURS`.
pub fn load_config() -> Result<StudyPlanConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyPlanConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studyplan.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudyPlanConfig::default(),
    };

    if let Ok(value) = std::env::var(DAILY_HOURS_ENV) {
        apply_daily_hours_override(&mut config, &value)?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a config file body.
pub fn parse_config(content: &str) -> Result<StudyPlanConfig> {
    Ok(toml::from_str::<StudyPlanConfig>(content)?)
}

fn apply_daily_hours_override(config: &mut StudyPlanConfig, value: &str) -> Result<()> {
    config.daily_hours = value
        .trim()
        .parse()
        .with_context(|| format!("{DAILY_HOURS_ENV} must be a whole number, got '{value}'"))?;
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studyplan"))
}
