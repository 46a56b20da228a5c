//! studyplan CLI: exam study planning from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "studyplan",
    version,
    about = "Exam study planner with weighted allocation and progress tracking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a study plan
    Plan {
        /// Path to a .toml subject set
        #[arg(long)]
        subjects: Option<PathBuf>,

        /// Extra subject as NAME:LEVEL (level: weak, medium, strong)
        #[arg(long = "subject", value_name = "NAME:LEVEL")]
        subject: Vec<String>,

        /// Hours available per day (1-24)
        #[arg(long)]
        daily_hours: Option<u32>,

        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        exam_date: Option<String>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export formats: csv, html, json, all, none
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Predict an exam score
    Predict {
        /// Hours studied per day
        #[arg(long)]
        daily_hours: f64,

        /// Days until the exam
        #[arg(long)]
        days_remaining: f64,

        /// Average difficulty weight (1 = strong, 3 = weak)
        #[arg(long)]
        difficulty: f64,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Log hours studied per day and compare against the target
    Track {
        /// Daily target in hours
        #[arg(long)]
        daily_hours: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a subject set TOML file
    Validate {
        /// Path to the subject set file
        #[arg(long)]
        subjects: PathBuf,
    },

    /// Create starter config and example subject set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("studyplan=info,studyplan_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan {
            subjects,
            subject,
            daily_hours,
            exam_date,
            output,
            format,
            config,
        } => commands::plan::execute(commands::plan::PlanArgs {
            subjects,
            subject,
            daily_hours,
            exam_date,
            output,
            format,
            config,
        }),
        Commands::Predict {
            daily_hours,
            days_remaining,
            difficulty,
            config,
        } => commands::predict::execute(daily_hours, days_remaining, difficulty, config),
        Commands::Track {
            daily_hours,
            config,
        } => commands::track::execute(daily_hours, config),
        Commands::Validate { subjects } => commands::validate::execute(subjects),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
