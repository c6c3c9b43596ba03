//! Per-project monthly effort ledger.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::month_key::MonthKey;

/// Accumulated effort per month for one project.
///
/// Writes only ever add; a key that was never written reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLedger {
    entries: BTreeMap<MonthKey, f64>,
}

/// Two-decimal rendering shared by every exported cell.
pub fn format_effort(amount: f64) -> String {
    format!("{:.2}", amount)
}

impl MonthlyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add effort to the given year-month.
    pub fn add(&mut self, year: i32, month: Month, amount: f64) {
        self.add_to(MonthKey::new(year, month), amount);
    }

    pub fn add_to(&mut self, key: MonthKey, amount: f64) {
        *self.entries.entry(key).or_insert(0.0) += amount;
    }

    pub fn get(&self, key: &MonthKey) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Months this ledger has seen, ascending.
    pub fn months(&self) -> impl Iterator<Item = &MonthKey> {
        self.entries.keys()
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One formatted cell per requested key, in the caller's order.
    ///
    /// Absent months are zero-filled so rows from different ledgers line up
    /// under the same header.
    pub fn collect_ordered(&self, keys: &[MonthKey]) -> Vec<String> {
        keys.iter().map(|k| format_effort(self.get(k))).collect()
    }
}
