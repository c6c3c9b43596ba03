//! Project → ledger aggregation across a whole batch run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::entry::EffortEntry;
use crate::ledger::MonthlyLedger;
use crate::month_key::MonthKey;

/// Caller-owned aggregation state for one run.
///
/// Projects are kept in a `BTreeMap` so every enumeration (and therefore
/// every exported table) lists them in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    projects: BTreeMap<String, MonthlyLedger>,
}

impl ProjectSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger for `project`, inserted empty on first request.
    pub fn get_or_create(&mut self, project: &str) -> &mut MonthlyLedger {
        if !self.projects.contains_key(project) {
            tracing::debug!(project, "new project ledger");
        }
        self.projects.entry(project.to_string()).or_default()
    }

    pub fn get(&self, project: &str) -> Option<&MonthlyLedger> {
        self.projects.get(project)
    }

    pub fn ingest(&mut self, entry: &EffortEntry) {
        self.get_or_create(&entry.project)
            .add_to(entry.month_key(), entry.amount);
    }

    pub fn ingest_all<'a>(&mut self, entries: impl IntoIterator<Item = &'a EffortEntry>) {
        for entry in entries {
            self.ingest(entry);
        }
    }

    /// Union of every ledger's months, deduplicated and ascending.
    ///
    /// Recomputed on each call; call it once all input has been ingested.
    pub fn all_months_sorted(&self) -> Vec<MonthKey> {
        let months: BTreeSet<MonthKey> = self
            .projects
            .values()
            .flat_map(|ledger| ledger.months().copied())
            .collect();
        months.into_iter().collect()
    }

    /// Projects with their ledgers, ascending by name.
    pub fn projects(&self) -> impl Iterator<Item = (&str, &MonthlyLedger)> {
        self.projects.iter().map(|(name, ledger)| (name.as_str(), ledger))
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total days per project over every month.
    pub fn project_totals(&self) -> Vec<(String, f64)> {
        self.projects
            .iter()
            .map(|(name, ledger)| (name.clone(), ledger.total()))
            .collect()
    }

    pub fn grand_total(&self) -> f64 {
        self.projects.values().map(MonthlyLedger::total).sum()
    }
}
