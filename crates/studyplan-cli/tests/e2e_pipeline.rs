//! End-to-end pipeline tests: subject set → engine → exports.
//!
//! These run the library crates directly, without the binary, so the plan
//! date can be pinned.

use std::path::PathBuf;

use chrono::NaiveDate;

use studyplan_core::engine::StudyPlanner;
use studyplan_core::model::{Difficulty, PlanRequest, Subject};
use studyplan_core::parser::parse_subject_set_str;
use studyplan_core::plan::StudyPlan;
use studyplan_core::predictor::{PredictorConfig, ScoreBand};
use studyplan_core::progress::ProgressLog;
use studyplan_core::traits::PlanningEngine;
use studyplan_core::PlanError;
use studyplan_report::csv::{generate_csv, write_csv_export};
use studyplan_report::html::{generate_html, write_html_report, PREDICTION_PLACEHOLDER};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

const SUBJECT_SET: &str = r#"
[plan]
name = "Midterms"
daily_hours = 5
exam_date = "2026-10-21"

[[subjects]]
name = "Organic Chemistry"
difficulty = "weak"

[[subjects]]
name = "Statistics"
difficulty = "medium"

[[subjects]]
name = "  "
difficulty = "weak"

[[subjects]]
name = "Drawing"
difficulty = "strong"
"#;

#[test]
fn e2e_subject_set_to_exports() {
    let set = parse_subject_set_str(SUBJECT_SET, &PathBuf::from("midterms.toml")).unwrap();
    assert_eq!(set.skipped_blank, 1);
    let name = set.name.clone();
    let request = set.into_request(4, today());

    let mut plan = StudyPlanner::default().plan(&request, today()).unwrap();
    plan.name = name;

    assert_eq!(plan.days_remaining, 5);
    assert_eq!(plan.subject_count(), 3);
    assert!((plan.total_daily_hours() - 5.0).abs() < 1e-9);
    assert_eq!(plan.primary_focus.subject, "Organic Chemistry");
    assert_eq!(plan.maintain_strength.subject, "Drawing");

    // 5*5 + 1.5*5 - 3*2 = 26.5
    let prediction = plan.prediction.unwrap();
    assert!((prediction.score - 26.5).abs() < 1e-6);
    assert_eq!(prediction.band, ScoreBand::AtRisk);

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join(format!("{}.csv", plan.file_stem()));
    let html_path = dir.path().join(format!("{}.html", plan.file_stem()));
    let json_path = dir.path().join(format!("{}.json", plan.file_stem()));

    write_csv_export(&plan, &csv_path).unwrap();
    write_html_report(&plan, &html_path).unwrap();
    plan.save_json(&json_path).unwrap();

    assert!(csv_path.ends_with("study_plan_20261016.csv"));
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], "Organic Chemistry,3,2.5");
    assert_eq!(rows[2], "Statistics,2,1.67");
    assert_eq!(rows[3], "Drawing,1,0.83");

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Midterms"));
    assert!(html.contains("At Risk"));
    assert!(html.contains("Organic Chemistry"));

    let loaded = StudyPlan::load_json(&json_path).unwrap();
    assert_eq!(loaded.allocations, plan.allocations);
    assert_eq!(loaded.name.as_deref(), Some("Midterms"));
}

#[test]
fn e2e_degraded_prediction_still_exports() {
    let planner = StudyPlanner::new(PredictorConfig {
        seed: 42,
        sample_count: 1,
    });
    let request = PlanRequest {
        subjects: vec![
            Subject::new("Biology", Difficulty::Medium),
            Subject::new("Geography", Difficulty::Medium),
        ],
        daily_hours: 3,
        exam_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
    };

    let plan = planner.plan(&request, today()).unwrap();
    assert!(plan.prediction.is_none());

    let csv = generate_csv(&plan.allocations).unwrap();
    assert!(csv.contains("Biology,2,1.5"));
    assert!(csv.contains("Geography,2,1.5"));

    let html = generate_html(&plan);
    assert!(html.contains(PREDICTION_PLACEHOLDER));
}

#[test]
fn e2e_invalid_request_stops_before_rendering() {
    let request = PlanRequest {
        subjects: (0..11)
            .map(|i| Subject::new(format!("Subject {i}"), Difficulty::Weak))
            .collect(),
        daily_hours: 4,
        exam_date: today(),
    };
    let err = StudyPlanner::default().plan(&request, today()).unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput(_)));
}

#[test]
fn e2e_progress_session() {
    let planner = StudyPlanner::default();
    let mut log = ProgressLog::new();

    for hours in [3.0, 5.0, 0.0, 4.0] {
        planner.track_progress(&mut log, hours, 4.0).unwrap();
    }
    let summary = log.summary(4.0).unwrap();
    assert_eq!(summary.days_logged, 4);
    assert_eq!(summary.total, 12.0);
    assert_eq!(summary.target_achievement_percent, 75.0);
    assert_eq!(summary.total_vs_target, -4.0);
}
