//! Row model for exporting a summary as a table.

use crate::summary::ProjectSummary;

/// First header cell.
pub const PROJECT_HEADER: &str = "Project";

/// Header plus one row per project, all cells already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Render a summary: `Project, <months…>` then one zero-filled row per
    /// project, projects ascending.
    pub fn from_summary(summary: &ProjectSummary) -> Self {
        let months = summary.all_months_sorted();

        let mut header = Vec::with_capacity(months.len() + 1);
        header.push(PROJECT_HEADER.to_string());
        header.extend(months.iter().map(ToString::to_string));

        let rows = summary
            .projects()
            .map(|(name, ledger)| {
                let mut row = Vec::with_capacity(months.len() + 1);
                row.push(name.to_string());
                row.extend(ledger.collect_ordered(&months));
                row
            })
            .collect();

        Self { header, rows }
    }

    /// Header first, then data rows.
    pub fn records(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}
