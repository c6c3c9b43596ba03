use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use timesheet_core::{ProjectAttributor, DEFAULT_CATCH_ALL};
use timesheet_trello::DEFAULT_FINISHED_LIST;

use crate::state::{ensure_timesheet_home, timesheet_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trello: TrelloSection,
    pub summary: SummarySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrelloSection {
    pub app_key: Option<String>,
    pub token: Option<String>,
    pub board: Option<String>,
    /// Name of the list whose cards count as done
    pub finished_list: String,
}

impl Default for TrelloSection {
    fn default() -> Self {
        Self {
            app_key: None,
            token: None,
            board: None,
            finished_list: DEFAULT_FINISHED_LIST.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySection {
    /// Project for entries without any tag
    pub catch_all_project: String,
}

impl Default for SummarySection {
    fn default() -> Self {
        Self {
            catch_all_project: DEFAULT_CATCH_ALL.to_string(),
        }
    }
}

impl Config {
    pub fn attributor(&self) -> ProjectAttributor {
        ProjectAttributor::new(self.summary.catch_all_project.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(timesheet_home()?.join("config.toml"))
}

/// Load the config at `path` (or the default location); a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_timesheet_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}
