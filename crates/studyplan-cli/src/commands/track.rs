//! The `studyplan track` command.
//!
//! Reads one command per line from stdin until `quit` or end of input:
//!
//! - `<hours>` or `add <hours>` logs the next day
//! - `show` prints the log and the summary
//! - `quit` / `exit` ends the session
//!
//! The log is discarded when the session ends.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use studyplan_core::config::load_config_from;
use studyplan_core::engine::StudyPlanner;
use studyplan_core::model::{MAX_DAILY_HOURS, MIN_DAILY_HOURS};
use studyplan_core::progress::{ProgressLog, ProgressSummary};
use studyplan_core::traits::PlanningEngine;

pub fn execute(daily_hours: Option<u32>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let budget = daily_hours.unwrap_or(config.daily_hours);
    anyhow::ensure!(
        (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&budget),
        "daily target must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS} hours, got {budget}"
    );

    let planner = StudyPlanner::new(config.predictor);
    eprintln!(
        "Tracking against a daily target of {budget}h. Enter hours, 'show' or 'quit'."
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&planner, f64::from(budget), stdin.lock(), &mut stdout.lock())
}

enum Command {
    Add(f64),
    Show,
    Quit,
    Skip,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Skip);
    }
    let lower = line.to_lowercase();
    match lower.as_str() {
        "show" | "summary" => return Ok(Command::Show),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }
    let value = lower.strip_prefix("add").map(str::trim).unwrap_or(lower.as_str());
    let hours: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("unrecognized input '{line}'; enter hours, 'show' or 'quit'"))?;
    Ok(Command::Add(hours))
}

/// Drive a session over any line source. Rejected lines are reported and
/// the session continues.
pub fn run_session<E, R, W>(engine: &E, budget: f64, input: R, out: &mut W) -> Result<()>
where
    E: PlanningEngine + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut log = ProgressLog::new();

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };
        match command {
            Command::Skip => {}
            Command::Quit => break,
            Command::Show => print_log(&log, budget, out)?,
            Command::Add(hours) => match engine.track_progress(&mut log, hours, budget) {
                Ok(summary) => writeln!(
                    out,
                    "Day {}: {:.1}h logged ({:.1}% of target so far)",
                    summary.days_logged, hours, summary.target_achievement_percent
                )?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
        }
    }

    if !log.is_empty() {
        print_log(&log, budget, out)?;
    }
    Ok(())
}

fn print_log<W: Write>(log: &ProgressLog, budget: f64, out: &mut W) -> Result<()> {
    use comfy_table::{Cell, Table};

    let Some(summary) = log.summary(budget) else {
        writeln!(out, "No study hours logged yet.")?;
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["Day", "Hours", "Target", "Difference"]);
    for (day, hours) in log.entries() {
        table.add_row(vec![
            Cell::new(day),
            Cell::new(format!("{hours:.1}")),
            Cell::new(format!("{budget:.1}")),
            Cell::new(format!("{:+.1}", hours - budget)),
        ]);
    }
    writeln!(out, "{table}")?;
    write_summary(&summary, out)
}

fn write_summary<W: Write>(s: &ProgressSummary, out: &mut W) -> Result<()> {
    writeln!(out, "Days logged: {}", s.days_logged)?;
    writeln!(
        out,
        "Total hours: {:.1}h ({:+.1}h vs target)",
        s.total, s.total_vs_target
    )?;
    writeln!(
        out,
        "Average per day: {:.1}h ({:+.1}h vs target)",
        s.average, s.average_vs_target
    )?;
    writeln!(
        out,
        "Target achievement: {:.1}%",
        s.target_achievement_percent
    )?;
    Ok(())
}
