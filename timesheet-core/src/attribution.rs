//! Deterministic project attribution from an entry's tags.

use serde::{Deserialize, Serialize};

/// Project name used when an entry carries no tag at all.
pub const DEFAULT_CATCH_ALL: &str = "unassigned";

/// Decides which project owns a unit of effort.
///
/// Only the first tag counts: an entry tagged `["alpha", "beta"]` books its
/// whole amount on `alpha`. Untagged entries go to the catch-all project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAttributor {
    catch_all: String,
}

impl Default for ProjectAttributor {
    fn default() -> Self {
        Self::new(DEFAULT_CATCH_ALL)
    }
}

impl ProjectAttributor {
    pub fn new(catch_all: impl Into<String>) -> Self {
        Self {
            catch_all: catch_all.into(),
        }
    }

    pub fn catch_all(&self) -> &str {
        &self.catch_all
    }

    pub fn attribute<'a, S: AsRef<str>>(&'a self, tags: &'a [S]) -> &'a str {
        match tags.first() {
            Some(tag) => tag.as_ref(),
            None => self.catch_all.as_str(),
        }
    }
}
