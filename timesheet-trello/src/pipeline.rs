//! Card pipelines: fetch the finished list and turn it into effort.

use anyhow::{Context, Result};
use timesheet_core::{split_daily_effort, EffortEntry, ProjectAttributor, ProjectSummary, TaskCard};

use crate::client::TrelloClient;
use crate::types::into_task_cards;

/// Default name of the list holding finished cards.
pub const DEFAULT_FINISHED_LIST: &str = "Fini";

/// Fetch the dated cards of the board's finished list.
///
/// A missing list is logged and yields no cards; connection and credential
/// failures are returned as errors.
pub async fn finished_cards(
    client: &TrelloClient,
    board_id: &str,
    list_name: &str,
) -> Result<Vec<TaskCard>> {
    let board = client
        .board(board_id)
        .await
        .with_context(|| format!("getting board {board_id}"))?;
    tracing::info!(board = %board.name, "connected to board");

    let Some(list) = client
        .find_list(board_id, list_name)
        .await
        .context("getting lists")?
    else {
        tracing::warn!(list = list_name, board = %board.name, "cannot find finished list");
        return Ok(Vec::new());
    };

    let cards = client
        .cards(&list.id)
        .await
        .with_context(|| format!("getting cards of list {}", list.name))?;
    tracing::info!(list = %list.name, cards = cards.len(), "fetched cards");

    Ok(into_task_cards(&cards))
}

/// Split the cards per day and aggregate them per project and month.
pub fn summarize_cards(
    cards: &[TaskCard],
    attributor: &ProjectAttributor,
) -> (Vec<EffortEntry>, ProjectSummary) {
    let entries = split_daily_effort(cards, attributor);
    let mut summary = ProjectSummary::new();
    summary.ingest_all(&entries);
    (entries, summary)
}
