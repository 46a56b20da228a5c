//! Synthetic performance predictor.
//!
//! A least-squares fit over generated samples whose label follows a fixed
//! linear formula:
//!
//! ```text
//! score = 5 * hours + 1.5 * days - 3 * difficulty
//! ```
//!
//! The data carries no real-world signal. It is a deterministic placeholder
//! that keeps the same inputs and output shape a real model would have.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Intercept plus three features.
const PARAMS: usize = 4;

/// Pivots smaller than this are treated as a singular system.
const PIVOT_EPSILON: f64 = 1e-9;

/// Training parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Seed for the sample generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of generated training samples.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_seed() -> u64 {
    42
}

fn default_sample_count() -> usize {
    100
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sample_count: default_sample_count(),
        }
    }
}

/// One generated training row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub hours: f64,
    pub days: f64,
    pub difficulty: f64,
    pub score: f64,
}

/// Ground-truth label for a synthetic sample.
pub fn synthetic_score(hours: f64, days: f64, difficulty: f64) -> f64 {
    5.0 * hours + 1.5 * days - 3.0 * difficulty
}

/// Generate `count` samples from a generator seeded with `seed`.
///
/// hours in [1, 10), days in [1, 30), difficulty in [1, 4), all integers.
pub fn generate_samples(seed: u64, count: usize) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let hours = f64::from(rng.gen_range(1..10u32));
            let days = f64::from(rng.gen_range(1..30u32));
            let difficulty = f64::from(rng.gen_range(1..4u32));
            Sample {
                hours,
                days,
                difficulty,
                score: synthetic_score(hours, days, difficulty),
            }
        })
        .collect()
}

/// Fitted linear model over (daily hours, days remaining, average difficulty).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    /// Coefficients for hours, days, and difficulty, in that order.
    pub coefficients: [f64; 3],
}

impl LinearModel {
    /// Generate the synthetic data set and fit it.
    pub fn train(config: &PredictorConfig) -> Result<Self, PlanError> {
        let samples = generate_samples(config.seed, config.sample_count);
        let model = Self::fit(&samples)?;
        tracing::debug!(
            seed = config.seed,
            samples = samples.len(),
            intercept = model.intercept,
            coefficients = ?model.coefficients,
            "trained performance predictor"
        );
        Ok(model)
    }

    /// Ordinary least squares with intercept, via the normal equations.
    pub fn fit(samples: &[Sample]) -> Result<Self, PlanError> {
        if samples.len() < PARAMS {
            return Err(PlanError::PredictionUnavailable(format!(
                "need at least {PARAMS} samples to fit, got {}",
                samples.len()
            )));
        }

        // Accumulate X^T X and X^T y with X rows = [1, hours, days, difficulty].
        let mut xtx = [[0.0f64; PARAMS]; PARAMS];
        let mut xty = [0.0f64; PARAMS];
        for s in samples {
            let row = [1.0, s.hours, s.days, s.difficulty];
            for i in 0..PARAMS {
                xty[i] += row[i] * s.score;
                for j in 0..PARAMS {
                    xtx[i][j] += row[i] * row[j];
                }
            }
        }

        let beta = solve(xtx, xty).ok_or_else(|| {
            PlanError::PredictionUnavailable(
                "training data is degenerate (singular normal matrix)".into(),
            )
        })?;

        Ok(Self {
            intercept: beta[0],
            coefficients: [beta[1], beta[2], beta[3]],
        })
    }

    /// Raw, unclamped prediction.
    pub fn predict(&self, daily_hours: f64, days_remaining: f64, avg_difficulty: f64) -> f64 {
        self.intercept
            + self.coefficients[0] * daily_hours
            + self.coefficients[1] * days_remaining
            + self.coefficients[2] * avg_difficulty
    }
}

/// Gaussian elimination with partial pivoting. `None` if singular.
fn solve(mut a: [[f64; PARAMS]; PARAMS], mut b: [f64; PARAMS]) -> Option<[f64; PARAMS]> {
    for col in 0..PARAMS {
        let pivot = (col..PARAMS).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..PARAMS {
            let factor = a[row][col] / a[col][col];
            for k in col..PARAMS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; PARAMS];
    for row in (0..PARAMS).rev() {
        let tail: f64 = (row + 1..PARAMS).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

/// Status band for a predicted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    AtRisk,
    OnTrack,
    Excellent,
}

impl ScoreBand {
    /// < 50 at risk, 50..75 on track, >= 75 excellent.
    pub fn from_score(score: f64) -> Self {
        if score < 50.0 {
            ScoreBand::AtRisk
        } else if score < 75.0 {
            ScoreBand::OnTrack
        } else {
            ScoreBand::Excellent
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            ScoreBand::AtRisk => {
                "Critical: increase study hours and focus more on weak subjects. Consider using active recall techniques."
            }
            ScoreBand::OnTrack => {
                "Moderate: you're on the right track. Stay consistent and practice more problems."
            }
            ScoreBand::Excellent => {
                "Excellent: great preparation level. Keep up the good work and help peers."
            }
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreBand::AtRisk => write!(f, "At Risk"),
            ScoreBand::OnTrack => write!(f, "On Track"),
            ScoreBand::Excellent => write!(f, "Excellent"),
        }
    }
}

/// A predicted score and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Unrounded model output. Not clamped to 0..=100.
    pub score: f64,
    pub band: ScoreBand,
}

impl Prediction {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            band: ScoreBand::from_score(score),
        }
    }

    /// Score rounded to two decimal places.
    pub fn display_score(&self) -> f64 {
        crate::model::round2(self.score)
    }
}
