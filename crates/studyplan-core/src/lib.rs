//! studyplan-core: allocation, progress tracking, and score prediction.
//!
//! This crate defines the data model, the planning engine, and the small
//! amount of arithmetic the rest of studyplan builds on. Rendering and
//! export live in `studyplan-report`.

pub mod allocator;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod plan;
pub mod predictor;
pub mod progress;
pub mod schedule;
pub mod traits;

pub use error::PlanError;
