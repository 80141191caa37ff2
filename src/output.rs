//! Output formatting and persistence for student reports.
//!
//! Supports pretty-printing, JSON serialization, and CSV export of totals.

use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::report::StudentReport;
use crate::error::{Result, StudentError};
use crate::student::StudentRecord;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &StudentReport) {
    debug!("{:#?}", report);
}

/// Writes a report as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_report_json(path: impl AsRef<Path>, report: &StudentReport) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| StudentError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(|e| StudentError::io(path, e))?;

    debug!(path = %path.display(), "Wrote JSON report");
    Ok(())
}

const TOTALS_HEADER: [&str; 5] = ["name", "math", "english", "science", "total"];

#[derive(Serialize)]
struct TotalsRow<'a> {
    name: &'a str,
    math: i64,
    english: i64,
    science: i64,
    total: i128,
}

/// Writes one CSV row per record with its three scores and total, headers included.
pub fn write_totals_csv(path: impl AsRef<Path>, records: &[StudentRecord]) -> Result<()> {
    let path = path.as_ref();
    // serialize() only emits headers alongside a first row.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(TOTALS_HEADER)?;

    for r in records {
        writer.serialize(TotalsRow {
            name: &r.name,
            math: r.math,
            english: r.english,
            science: r.science,
            total: r.total(),
        })?;
    }
    writer.flush().map_err(|e| StudentError::io(path, e))?;

    info!(path = %path.display(), rows = records.len(), "Exported score totals");
    Ok(())
}
