//! CSV export of the allocation table.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use studyplan_core::model::Allocation;
use studyplan_core::plan::StudyPlan;

/// Header row of the export.
pub const CSV_HEADER: [&str; 3] = ["Subject", "Difficulty Weight", "Daily Allocated Hours"];

/// One exported row. Hours are rounded to two decimal places.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "Difficulty Weight")]
    weight: u32,
    #[serde(rename = "Daily Allocated Hours")]
    hours: f64,
}

impl<'a> From<&'a Allocation> for CsvRow<'a> {
    fn from(a: &'a Allocation) -> Self {
        Self {
            subject: &a.subject,
            weight: a.weight,
            hours: a.display_hours(),
        }
    }
}

/// Serialize allocation rows as CSV with a header row.
pub fn generate_csv(allocations: &[Allocation]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // The serializer only emits the header with the first row.
    if allocations.is_empty() {
        wtr.write_record(CSV_HEADER)?;
    }
    for a in allocations {
        wtr.serialize(CsvRow::from(a))?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Write a plan's allocation table to a CSV file.
pub fn write_csv_export(plan: &StudyPlan, path: &Path) -> Result<()> {
    let csv = generate_csv(&plan.allocations)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
    Ok(())
}
