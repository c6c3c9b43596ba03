use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$TIMESHEET_HOME`, or `~/.timesheet`.
pub fn timesheet_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TIMESHEET_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".timesheet"))
}

pub fn ensure_timesheet_home() -> Result<PathBuf> {
    let dir = timesheet_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
