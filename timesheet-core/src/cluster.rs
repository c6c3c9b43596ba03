//! Daily fair-share splitting for task cards.
//!
//! Every calendar day is worth one day of effort. The cards due on that day
//! share it equally, one `1/n` slice per card, regardless of which project
//! each card belongs to.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::attribution::ProjectAttributor;
use crate::entry::EffortEntry;

/// A finished task card, as handed over by a card source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCard {
    pub name: String,
    pub due: DateTime<Utc>,
    pub labels: Vec<String>,
}

impl TaskCard {
    pub fn new(name: impl Into<String>, due: DateTime<Utc>, labels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            due,
            labels,
        }
    }

    /// Due date at day granularity; time of day is ignored.
    pub fn due_day(&self) -> NaiveDate {
        self.due.date_naive()
    }
}

/// Cards sharing one due day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCluster<'a> {
    pub day: NaiveDate,
    pub cards: Vec<&'a TaskCard>,
}

impl DailyCluster<'_> {
    /// Share of the day allotted to each card in the cluster.
    pub fn duration_in_day(&self) -> f64 {
        1.0 / self.cards.len() as f64
    }
}

/// Group cards by due day, ascending.
pub fn group_by_day(cards: &[TaskCard]) -> Vec<DailyCluster<'_>> {
    let mut days: BTreeMap<NaiveDate, Vec<&TaskCard>> = BTreeMap::new();
    for card in cards {
        days.entry(card.due_day()).or_default().push(card);
    }

    days.into_iter().map(|(day, cards)| DailyCluster { day, cards }).collect()
}

/// Turn cards into attributed effort entries, one per card.
///
/// Within a day the entries keep the cards' input order.
pub fn split_daily_effort(cards: &[TaskCard], attributor: &ProjectAttributor) -> Vec<EffortEntry> {
    let clusters = group_by_day(cards);
    tracing::debug!(cards = cards.len(), days = clusters.len(), "split cards into daily clusters");

    clusters
        .iter()
        .flat_map(|cluster| {
            let share = cluster.duration_in_day();
            cluster.cards.iter().map(move |card| {
                EffortEntry::attributed(
                    attributor,
                    cluster.day,
                    share,
                    card.name.clone(),
                    card.labels.clone(),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn card(name: &str, y: i32, m: u32, d: u32, h: u32, labels: &[&str]) -> TaskCard {
        TaskCard::new(
            name,
            Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            labels.iter().map(|l| l.to_string()).collect(),
        )
    }

    #[test]
    fn test_single_card_gets_full_day() {
        let cards = vec![card("solo", 2024, 5, 2, 9, &["x"])];
        let entries = split_daily_effort(&cards, &ProjectAttributor::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, 1.0);
        assert_eq!(entries[0].label, "solo");
    }

    #[test]
    fn test_time_of_day_is_ignored_for_grouping() {
        let cards = vec![
            card("morning", 2024, 5, 2, 1, &["x"]),
            card("evening", 2024, 5, 2, 23, &["y"]),
            card("next", 2024, 5, 3, 0, &["y"]),
        ];
        let clusters = group_by_day(&cards);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].cards.len(), 2);
        assert_eq!(clusters[0].duration_in_day(), 0.5);
        assert_eq!(clusters[1].duration_in_day(), 1.0);
    }

    #[test]
    fn test_clusters_are_day_ordered() {
        let cards = vec![
            card("late", 2024, 6, 1, 9, &[]),
            card("early", 2024, 1, 1, 9, &[]),
        ];
        let days: Vec<_> = group_by_day(&cards).iter().map(|c| c.day).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
            ]
        );
    }

    #[test]
    fn test_unlabelled_cards_use_catch_all() {
        let cards = vec![card("chore", 2024, 5, 2, 9, &[])];
        let entries = split_daily_effort(&cards, &ProjectAttributor::new("divers"));
        assert_eq!(entries[0].project, "divers");
    }
}
