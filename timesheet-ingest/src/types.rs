use serde::{Deserialize, Serialize};

/// Minimum number of positional fields in a timesheet log record.
pub const MIN_FIELDS: usize = 4;

/// One raw timesheet log record, fields as read from the file.
///
/// Layout: `date (YYYY-MM-DD), effort (decimal days), label, tags (comma-separated)`.
/// Extra trailing fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields decoded lossily: invalid UTF-8 becomes U+FFFD instead of an error.
    pub fn from_bytes(record: &csv::ByteRecord) -> Self {
        Self::new(record.iter().map(String::from_utf8_lossy))
    }
}

/// A single reason for rejecting a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIssue {
    #[error("expected at least {} fields, found {found}", MIN_FIELDS)]
    TooFewFields { found: usize },
    #[error("malformed date {0:?}")]
    MalformedDate(String),
    #[error("malformed effort {0:?}, not a number")]
    MalformedEffort(String),
}

/// A rejected record, listing every check it failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("skipped record: {}", render_issues(.issues))]
pub struct RecordError {
    pub issues: Vec<RecordIssue>,
}

fn render_issues(issues: &[RecordIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outcome counters for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub accepted: usize,
    pub skipped: usize,
}
