//! CLI entry point for the student report tool.
//!
//! Loads a student records file and prints statistics, grades, pass/fail
//! summaries and score totals. Running without a subcommand prints the full
//! summary report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use student_report::analyzers::export::convert_scores_to_array;
use student_report::analyzers::filter::filter_students_by_score;
use student_report::analyzers::grade::grade_all_students;
use student_report::analyzers::pass_fail::{DEFAULT_PASSING_SCORE, students_passing_all};
use student_report::analyzers::report::build_report;
use student_report::{
    StudentRecord,
    output::{print_pretty, write_report_json, write_totals_csv},
    parser::read_student_data,
    stats::calculate_subject_statistics,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const GRADES_PREVIEW: usize = 3;
const TOTALS_PREVIEW: usize = 5;

#[derive(Parser)]
#[command(name = "student_report")]
#[command(about = "Statistics, grades and pass/fail summaries for student score files", long_about = None)]
struct Cli {
    /// Student records file (`name,age,math,english,science` per line)
    #[arg(short, long, global = true, env = "STUDENTS_FILE", default_value = "students.txt")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full summary report (default)
    Report {
        /// Inclusive score needed to pass a subject
        #[arg(short, long, default_value_t = DEFAULT_PASSING_SCORE, allow_negative_numbers = true)]
        passing_score: i64,
    },
    /// List students scoring below a threshold in one subject
    Filter {
        /// math, english or science (case-insensitive)
        #[arg(short, long)]
        subject: String,

        /// Names strictly below this score are listed
        #[arg(short, long, default_value_t = DEFAULT_PASSING_SCORE, allow_negative_numbers = true)]
        threshold: i64,
    },
    /// Print per-subject statistics as JSON
    Stats,
    /// Print every student's letter grades as JSON
    Grades,
    /// Write per-student scores and totals to a CSV file
    Export {
        /// CSV file to write
        #[arg(short, long, default_value = "totals.csv")]
        output: PathBuf,
    },
    /// Print or save the complete report as JSON
    Json {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Inclusive score needed to pass a subject
        #[arg(short, long, default_value_t = DEFAULT_PASSING_SCORE, allow_negative_numbers = true)]
        passing_score: i64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let records = read_student_data(&cli.file)?;

    match cli.command.unwrap_or(Commands::Report {
        passing_score: DEFAULT_PASSING_SCORE,
    }) {
        Commands::Report { passing_score } => {
            summary_report(&records, passing_score)?;
        }
        Commands::Filter { subject, threshold } => {
            let names = filter_students_by_score(&records, &subject, threshold)?;
            info!(subject = %subject, threshold, count = names.len(), "Students below threshold");
            for name in &names {
                println!("{name}");
            }
        }
        Commands::Stats => {
            let stats = calculate_subject_statistics(&records);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Grades => {
            let grades = grade_all_students(&records);
            println!("{}", serde_json::to_string_pretty(&grades)?);
        }
        Commands::Export { output } => {
            write_totals_csv(&output, &records)?;
        }
        Commands::Json {
            output,
            passing_score,
        } => {
            let report = build_report(&records, passing_score);
            print_pretty(&report);
            match output {
                Some(path) => write_report_json(&path, &report)?,
                None => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
    }

    Ok(())
}

/// Prints the step-by-step summary: record count, weak math students,
/// statistics, a grade preview, pass/fail results, table shape and totals.
#[tracing::instrument(skip(records), fields(records = records.len()))]
fn summary_report(records: &[StudentRecord], passing_score: i64) -> Result<()> {
    info!(total = records.len(), "Total students loaded");

    let below = filter_students_by_score(records, "math", DEFAULT_PASSING_SCORE)?;
    info!(names = ?below, "Below {} in math", DEFAULT_PASSING_SCORE);

    let stats = calculate_subject_statistics(records);
    info!(statistics = %serde_json::to_string(&stats)?, "Statistics");

    let grades = grade_all_students(records);
    let preview = &grades[..grades.len().min(GRADES_PREVIEW)];
    info!(grades = %serde_json::to_string(preview)?, "Grades sample");

    let summary = students_passing_all(records, passing_score);
    info!(passed = ?summary.passed_all, passing_score, "Passed all");
    info!(counts = %serde_json::to_string(&summary.pass_counts)?, "Pass counts");

    let (table, totals) = convert_scores_to_array(records);
    let (rows, cols) = table.shape();
    info!(rows, cols, "Array shape");

    let preview = &totals[..totals.len().min(TOTALS_PREVIEW)];
    info!(totals = %serde_json::to_string(preview)?, "Totals");

    Ok(())
}
