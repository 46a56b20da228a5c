//! The `studyplan predict` command.

use std::path::PathBuf;

use anyhow::Result;

use studyplan_core::config::load_config_from;
use studyplan_core::engine::StudyPlanner;
use studyplan_core::traits::PlanningEngine;

pub fn execute(
    daily_hours: f64,
    days_remaining: f64,
    difficulty: f64,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        daily_hours.is_finite() && daily_hours > 0.0,
        "daily hours must be a positive number"
    );
    anyhow::ensure!(
        days_remaining.is_finite() && days_remaining >= 1.0,
        "days remaining must be at least 1"
    );
    anyhow::ensure!(
        (1.0..=3.0).contains(&difficulty),
        "difficulty must be between 1 (strong) and 3 (weak)"
    );

    let config = load_config_from(config_path.as_deref())?;
    let planner = StudyPlanner::new(config.predictor);
    let prediction = planner.predict(daily_hours, days_remaining, difficulty)?;

    println!("Predicted score: {:.2}%", prediction.display_score());
    println!("Status: {}", prediction.band);
    println!("{}", prediction.band.recommendation());

    Ok(())
}
