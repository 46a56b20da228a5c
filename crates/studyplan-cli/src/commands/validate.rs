//! The `studyplan validate` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use studyplan_core::parser;

pub fn execute(subjects_path: PathBuf) -> Result<()> {
    let set = parser::parse_subject_set(&subjects_path)?;
    let label = set
        .name
        .clone()
        .unwrap_or_else(|| subjects_path.display().to_string());
    println!("Subject set: {} ({} subjects)", label, set.subjects.len());

    let warnings = parser::validate_subject_set(&set, Local::now().date_naive());
    for w in &warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Subject set valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
