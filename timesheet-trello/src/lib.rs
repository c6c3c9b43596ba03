//! timesheet-trello: Trello board client and card-based effort pipelines.

pub mod client;
pub mod pipeline;
pub mod types;

pub use client::{select_list, Credentials, TrelloClient, TrelloError, DEFAULT_BASE_URL};
pub use pipeline::{finished_cards, summarize_cards, DEFAULT_FINISHED_LIST};
pub use types::{into_task_cards, Board, Card, Label, List};
