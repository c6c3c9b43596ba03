//! CSV writers for summaries and effort logs.

use anyhow::Result;
use std::io::Write;
use timesheet_core::{format_effort, EffortEntry, ProjectSummary, SummaryTable};

/// Write the monthly summary: `Project,<months…>` then one row per project.
pub fn write_summary_csv<W: Write>(summary: &ProjectSummary, writer: W) -> Result<()> {
    let table = SummaryTable::from_summary(summary);
    let mut w = csv::Writer::from_writer(writer);
    for record in table.records() {
        w.write_record(record)?;
    }
    w.flush()?;
    Ok(())
}

/// Write entries back out as timesheet log records.
///
/// The output can be fed to the timesheet log reader again; tags are joined
/// with commas so the first one stays the owning project.
pub fn write_effort_log<'a, W: Write>(
    entries: impl IntoIterator<Item = &'a EffortEntry>,
    writer: W,
) -> Result<()> {
    let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    for e in entries {
        w.write_record([
            e.date.format("%Y-%m-%d").to_string(),
            format_effort(e.amount),
            e.label.clone(),
            e.tags.join(","),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Plain per-project totals report, tab separated, ending with the grand total.
pub fn write_project_totals<W: Write>(summary: &ProjectSummary, mut writer: W) -> Result<()> {
    for (project, days) in summary.project_totals() {
        writeln!(writer, "{project}\t{}", format_effort(days))?;
    }
    writeln!(writer, "---------------------------")?;
    writeln!(writer, "Total\t{}", format_effort(summary.grand_total()))?;
    writer.flush()?;
    Ok(())
}
