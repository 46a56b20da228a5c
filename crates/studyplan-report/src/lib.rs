//! studyplan-report: CSV and HTML exports for study plans.
//!
//! Turns a `StudyPlan` into a CSV table or a self-contained, printable HTML
//! document. Nothing here does any planning arithmetic.

pub mod csv;
pub mod html;
