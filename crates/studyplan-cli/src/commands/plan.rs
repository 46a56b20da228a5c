//! The `studyplan plan` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use studyplan_core::config::load_config_from;
use studyplan_core::engine::StudyPlanner;
use studyplan_core::parser;
use studyplan_core::plan::StudyPlan;
use studyplan_report::csv::write_csv_export;
use studyplan_report::html::{write_html_report, PREDICTION_PLACEHOLDER};

/// Arguments for one `plan` invocation.
pub struct PlanArgs {
    pub subjects: Option<PathBuf>,
    pub subject: Vec<String>,
    pub daily_hours: Option<u32>,
    pub exam_date: Option<String>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlanArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let today = Local::now().date_naive();

    let mut set = match &args.subjects {
        Some(path) => parser::parse_subject_set(path)?,
        None => parser::SubjectSet {
            name: None,
            daily_hours: None,
            exam_date: None,
            subjects: Vec::new(),
            skipped_blank: 0,
        },
    };
    for arg in &args.subject {
        match parser::parse_subject_arg(arg)? {
            Some(subject) => set.subjects.push(subject),
            None => set.skipped_blank += 1,
        }
    }
    if set.skipped_blank > 0 {
        tracing::warn!("skipped {} subject(s) with a blank name", set.skipped_blank);
    }

    if let Some(hours) = args.daily_hours {
        set.daily_hours = Some(hours);
    }
    if let Some(date) = &args.exam_date {
        set.exam_date = Some(parser::parse_date(date).context("invalid --exam-date")?);
    }

    let name = set.name.clone();
    let default_exam = config.default_exam_date(today)?;
    let request = set.into_request(config.daily_hours, default_exam);

    let planner = StudyPlanner::new(config.predictor);
    let mut plan = planner.plan(&request, today)?;
    plan.name = name;

    print_plan(&plan);

    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    let formats = resolve_formats(args.format.as_deref(), &config.formats);
    if formats.is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;
    let stem = plan.file_stem();

    for fmt in &formats {
        match fmt.as_str() {
            "csv" => {
                let path = output.join(format!("{stem}.csv"));
                write_csv_export(&plan, &path)?;
                eprintln!("CSV export: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("{stem}.html"));
                write_html_report(&plan, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "json" => {
                let path = output.join(format!("{stem}.json"));
                plan.save_json(&path)?;
                eprintln!("Plan saved to: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

/// `--format` wins over the configured list. `all` expands and `none`
/// disables exports.
fn resolve_formats(flag: Option<&str>, configured: &[String]) -> Vec<String> {
    let requested: Vec<String> = match flag {
        Some(f) => f
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        None => configured.iter().map(|s| s.trim().to_lowercase()).collect(),
    };

    if requested.iter().any(|f| f == "none") {
        return Vec::new();
    }
    if requested.iter().any(|f| f == "all") {
        return vec!["csv".into(), "html".into(), "json".into()];
    }
    let mut formats: Vec<String> = Vec::with_capacity(requested.len());
    for f in requested {
        if !formats.contains(&f) {
            formats.push(f);
        }
    }
    formats
}

fn print_plan(plan: &StudyPlan) {
    use comfy_table::{Cell, Table};

    if let Some(name) = &plan.name {
        println!("{name}");
    }
    println!(
        "Days remaining: {} ({}), exam on {}",
        plan.days_remaining,
        plan.urgency(),
        plan.exam_date
    );
    println!("Subjects: {}", plan.subject_count());
    println!(
        "Average per subject: {:.1}h",
        plan.average_hours_per_subject()
    );
    println!(
        "Total study time: {}h ({}h x {} days)",
        plan.total_study_hours(),
        plan.daily_hours,
        plan.days_remaining
    );

    let mut table = Table::new();
    table.set_header(vec!["Subject", "Difficulty", "Weight", "Daily Hours"]);
    for a in &plan.allocations {
        let level = a
            .difficulty()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&a.subject),
            Cell::new(level),
            Cell::new(a.weight),
            Cell::new(format!("{:.2}", a.display_hours())),
        ]);
    }
    println!("\n{table}\n");

    println!(
        "Primary focus: {} ({:.1}h daily). {}",
        plan.primary_focus.subject, plan.primary_focus.daily_hours, plan.primary_focus.advice
    );
    println!(
        "Maintain strength: {} ({:.1}h daily). {}",
        plan.maintain_strength.subject,
        plan.maintain_strength.daily_hours,
        plan.maintain_strength.advice
    );

    match &plan.prediction {
        Some(p) => {
            println!(
                "\nPredicted score: {:.2}% ({})",
                p.display_score(),
                p.band
            );
            println!("{}", p.band.recommendation());
        }
        None => println!("\n{PREDICTION_PLACEHOLDER}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Vec<String> {
        vec!["csv".to_string()]
    }

    #[test]
    fn formats_default_to_config() {
        assert_eq!(resolve_formats(None, &configured()), vec!["csv"]);
    }

    #[test]
    fn formats_all_and_none() {
        assert_eq!(
            resolve_formats(Some("all"), &configured()),
            vec!["csv", "html", "json"]
        );
        assert!(resolve_formats(Some("none"), &configured()).is_empty());
    }

    #[test]
    fn formats_are_deduplicated() {
        assert_eq!(
            resolve_formats(Some("JSON, csv,json"), &configured()),
            vec!["json", "csv"]
        );
    }
}
