//! timesheet-ingest: timesheet log parsing, record validation and CSV export.

pub mod export;
pub mod parsers;
pub mod record;
pub mod types;

pub use export::{write_effort_log, write_project_totals, write_summary_csv};
pub use parsers::timesheet_log::{load_timesheet, read_timesheet};
pub use record::{parse_log_date, split_tags, validate_record};
pub use types::{LoadReport, RawRecord, RecordError, RecordIssue, MIN_FIELDS};
