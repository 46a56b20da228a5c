//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn studyplan() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("studyplan").unwrap();
    cmd.env_remove("STUDYPLAN_DAILY_HOURS");
    cmd
}

fn exam_in(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn help_output() {
    studyplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exam study planner"));
}

#[test]
fn version_output() {
    studyplan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studyplan"));
}

#[test]
fn plan_from_subject_args() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["plan", "--subject", "Math:weak", "--subject", "Physics:strong"])
        .args(["--daily-hours", "4", "--exam-date", exam_in(30).as_str()])
        .args(["--format", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days remaining: 30 (On track)"))
        .stdout(predicate::str::contains("3.00"))
        .stdout(predicate::str::contains("1.00"))
        .stdout(predicate::str::contains("Primary focus: Math"))
        .stdout(predicate::str::contains("Maintain strength: Physics"))
        .stdout(predicate::str::contains("Predicted score: 59.00% (On Track)"));
}

#[test]
fn plan_close_exam_is_urgent() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["plan", "--subject", "History", "--daily-hours", "2"])
        .args(["--exam-date", exam_in(3).as_str(), "--format", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days remaining: 3 (Urgent)"))
        .stdout(predicate::str::contains("Total study time: 6h"));
}

#[test]
fn plan_writes_all_exports() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let stem = format!("study_plan_{}", Local::now().date_naive().format("%Y%m%d"));

    studyplan()
        .current_dir(dir.path())
        .arg("plan")
        .arg("--subjects")
        .arg(std::fs::canonicalize("../../subject-sets/finals.toml").unwrap())
        .arg("--output")
        .arg(&out)
        .args(["--format", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Autumn Finals"))
        .stdout(predicate::str::contains("Subjects: 4"));

    let csv = std::fs::read_to_string(out.join(format!("{stem}.csv"))).unwrap();
    assert!(csv.starts_with("Subject,Difficulty Weight,Daily Allocated Hours"));
    assert!(csv.contains("Mathematics,3,2.0\n"));
    assert!(csv.contains("English Literature,1,0.67\n"));

    let html = std::fs::read_to_string(out.join(format!("{stem}.html"))).unwrap();
    assert!(html.contains("Detailed Study Schedule"));

    let json = std::fs::read_to_string(out.join(format!("{stem}.json"))).unwrap();
    assert!(json.contains("\"Chemistry\""));
}

#[test]
fn plan_without_subjects_fails() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["plan", "--subject", "  :weak", "--format", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one subject"));
}

#[test]
fn plan_rejects_out_of_range_hours() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["plan", "--subject", "Art", "--daily-hours", "25", "--format", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn predict_prints_score_and_band() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["predict", "--daily-hours", "8", "--days-remaining", "20"])
        .args(["--difficulty", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted score: 67.00%"))
        .stdout(predicate::str::contains("Status: On Track"));
}

#[test]
fn track_session_from_stdin() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["track", "--daily-hours", "4"])
        .write_stdin("2\n4\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2: 4.0h logged"))
        .stdout(predicate::str::contains("Target achievement: 75.0%"));
}

#[test]
fn track_session_survives_bad_input() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["track", "--daily-hours", "2"])
        .write_stdin("lots\n30\nadd 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Target achievement: 100.0%"));
}

#[test]
fn validate_valid_subject_set() {
    studyplan()
        .arg("validate")
        .arg("--subjects")
        .arg("../../subject-sets/finals.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Autumn Finals (4 subjects)"))
        .stdout(predicate::str::contains("Subject set valid"));
}

#[test]
fn validate_reports_warnings() {
    studyplan()
        .arg("validate")
        .arg("--subjects")
        .arg("../../subject-sets/needs-review.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate subject: history"))
        .stdout(predicate::str::contains("blank name"))
        .stdout(predicate::str::contains("daily_hours is 30"));
}

#[test]
fn validate_nonexistent_file() {
    studyplan()
        .arg("validate")
        .arg("--subjects")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created studyplan.toml"))
        .stdout(predicate::str::contains("Created subject-sets/example.toml"));

    assert!(dir.path().join("studyplan.toml").exists());
    assert!(dir.path().join("subject-sets/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    studyplan()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_file_sets_daily_hours() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("studyplan.toml"), "daily_hours = 2\n").unwrap();

    studyplan()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["track"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target achievement: 50.0%"));
}

#[test]
fn env_overrides_config_daily_hours() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("studyplan.toml"), "daily_hours = 2\n").unwrap();

    studyplan()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("STUDYPLAN_DAILY_HOURS", "4")
        .args(["track"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target achievement: 25.0%"));
}

#[test]
fn plan_rejects_huge_exam_offset() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("studyplan.toml"),
        "default_exam_offset_days = 1000000000\n",
    )
    .unwrap();

    studyplan()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["plan", "--subject", "Art", "--format", "none"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("default_exam_offset_days"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn track_rejects_target_above_a_day() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["track", "--daily-hours", "100"])
        .write_stdin("24\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 24"))
        .stdout(predicate::str::contains("Target achievement").not());
}

#[test]
fn track_rejects_zero_target() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .args(["track", "--daily-hours", "0"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("daily target"));
}
