//! Trello REST payloads, trimmed to the fields the timesheet needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use timesheet_core::TaskCard;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Card {
    /// Core card view; `None` when the card has no due date.
    pub fn to_task_card(&self) -> Option<TaskCard> {
        let due = self.due?;
        Some(TaskCard::new(
            self.name.clone(),
            due,
            self.labels.iter().map(|l| l.name.clone()).collect(),
        ))
    }
}

/// Convert API cards, dropping (and logging) the ones without a due date.
pub fn into_task_cards(cards: &[Card]) -> Vec<TaskCard> {
    cards
        .iter()
        .filter_map(|card| {
            let task = card.to_task_card();
            if task.is_none() {
                tracing::warn!(card = %card.name, id = %card.id, "skipping card without due date");
            }
            task
        })
        .collect()
}
