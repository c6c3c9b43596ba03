//! Attributed effort entries: the unit flowing from sources into the ledgers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attribution::ProjectAttributor;
use crate::month_key::MonthKey;

/// One recorded unit of effort, already attributed to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortEntry {
    /// Calendar day the effort was spent on
    pub date: NaiveDate,
    /// Fractional work-days. Not clamped: zero and negative values pass through.
    pub amount: f64,
    /// Owning project, chosen from `tags`
    pub project: String,
    /// Free-text label (log record label or card name)
    pub label: String,
    /// All tags in their original order
    pub tags: Vec<String>,
}

impl EffortEntry {
    /// Build an entry, attributing it from its tags.
    pub fn attributed(
        attributor: &ProjectAttributor,
        date: NaiveDate,
        amount: f64,
        label: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        let project = attributor.attribute(&tags).to_string();
        Self {
            date,
            amount,
            project,
            label: label.into(),
            tags,
        }
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributed_keeps_all_tags() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let e = EffortEntry::attributed(
            &ProjectAttributor::default(),
            date,
            0.5,
            "review",
            vec!["alpha".to_string(), "beta".to_string()],
        );
        assert_eq!(e.project, "alpha");
        assert_eq!(e.tags, vec!["alpha", "beta"]);
        assert_eq!(e.month_key().to_string(), "2024-03");
    }

    #[test]
    fn test_untagged_entry_is_not_dropped() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let e = EffortEntry::attributed(&ProjectAttributor::default(), date, -1.0, "", Vec::new());
        assert_eq!(e.project, "unassigned");
        assert_eq!(e.amount, -1.0);
    }
}
