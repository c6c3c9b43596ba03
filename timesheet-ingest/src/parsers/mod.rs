pub mod timesheet_log;
