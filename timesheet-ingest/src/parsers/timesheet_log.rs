//! Timesheet log reader.
//!
//! One record per line, comma separated, no header row:
//!   2024-01-10,1.0,standup,"alpha,beta"
//!   2024-01-11,0.5,,
//!
//! Bad records (including ones with invalid UTF-8 in a date or effort field)
//! are logged and skipped; only I/O and CSV framing errors abort.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use timesheet_core::{ProjectAttributor, ProjectSummary};

use crate::record::validate_record;
use crate::types::{LoadReport, RawRecord};

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

/// Read a timesheet log file and ingest every valid record into `summary`.
pub fn load_timesheet(
    path: impl AsRef<Path>,
    attributor: &ProjectAttributor,
    summary: &mut ProjectSummary,
) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let report = read_timesheet(file, attributor, summary)
        .with_context(|| format!("reading {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        accepted = report.accepted,
        skipped = report.skipped,
        "loaded timesheet"
    );
    Ok(report)
}

/// Same as [`load_timesheet`] over any reader.
pub fn read_timesheet<R: Read>(
    input: R,
    attributor: &ProjectAttributor,
    summary: &mut ProjectSummary,
) -> Result<LoadReport> {
    let mut rdr = reader_builder().from_reader(input);
    let mut report = LoadReport::default();

    for result in rdr.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        match validate_record(&RawRecord::from_bytes(&record), attributor) {
            Ok(entry) => {
                summary.ingest(&entry);
                report.accepted += 1;
            }
            Err(e) => {
                tracing::warn!(line, "{e}");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
