//! timesheet-core: effort attribution, monthly ledgers, daily fair-share
//! splitting and the tabular row model.

pub mod attribution;
pub mod cluster;
pub mod entry;
pub mod ledger;
pub mod month_key;
pub mod summary;
pub mod table;

pub use attribution::{ProjectAttributor, DEFAULT_CATCH_ALL};
pub use cluster::{group_by_day, split_daily_effort, DailyCluster, TaskCard};
pub use entry::EffortEntry;
pub use ledger::{format_effort, MonthlyLedger};
pub use month_key::{MonthKey, MonthKeyError};
pub use summary::ProjectSummary;
pub use table::{SummaryTable, PROJECT_HEADER};
