//! The `studyplan init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("studyplan.toml").exists() {
        println!("studyplan.toml already exists, skipping.");
    } else {
        std::fs::write("studyplan.toml", SAMPLE_CONFIG)?;
        println!("Created studyplan.toml");
    }

    std::fs::create_dir_all("subject-sets")?;
    let example_path = Path::new("subject-sets/example.toml");
    if example_path.exists() {
        println!("subject-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SUBJECT_SET)?;
        println!("Created subject-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit subject-sets/example.toml with your subjects and exam date");
    println!("  2. Run: studyplan validate --subjects subject-sets/example.toml");
    println!("  3. Run: studyplan plan --subjects subject-sets/example.toml --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studyplan configuration

daily_hours = 4
default_exam_offset_days = 30
output_dir = "./studyplan-output"
formats = ["csv"]

[predictor]
seed = 42
sample_count = 100
"#;

const EXAMPLE_SUBJECT_SET: &str = r#"[plan]
name = "Example Exam Prep"
daily_hours = 4
# exam_date = "2026-12-01"

[[subjects]]
name = "Mathematics"
difficulty = "weak"

[[subjects]]
name = "Physics"
difficulty = "medium"

[[subjects]]
name = "Literature"
difficulty = "strong"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn starter_files_parse() {
        let config = studyplan_core::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, studyplan_core::config::StudyPlanConfig::default());

        let set = studyplan_core::parser::parse_subject_set_str(
            EXAMPLE_SUBJECT_SET,
            &PathBuf::from("example.toml"),
        )
        .unwrap();
        assert_eq!(set.subjects.len(), 3);
        assert!(set.exam_date.is_none());
    }
}
