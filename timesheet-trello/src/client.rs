//! Minimal Trello REST client: boards, lists and cards.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::types::{Board, Card, List};

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

#[derive(Debug, thiserror::Error)]
pub enum TrelloError {
    #[error("trello request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("trello rejected the credentials ({status}); check app key and token")]
    Unauthorized { status: StatusCode },
    #[error("trello error: {status} {body}")]
    Status { status: StatusCode, body: String },
}

/// List named exactly `name`; with duplicate names the last one wins.
pub fn select_list<'a>(lists: &'a [List], name: &str) -> Option<&'a List> {
    lists.iter().rev().find(|l| l.name == name)
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_key: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl TrelloClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, fields: &str) -> Result<T, TrelloError> {
        let url = self.url(path);
        tracing::debug!(%url, "trello GET");

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("key", self.credentials.app_key.as_str()),
                ("token", self.credentials.token.as_str()),
                ("fields", fields),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TrelloError::Unauthorized { status });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TrelloError::Status { status, body });
        }

        Ok(resp.json().await?)
    }

    pub async fn board(&self, board_id: &str) -> Result<Board, TrelloError> {
        self.get(&format!("boards/{board_id}"), "name").await
    }

    pub async fn lists(&self, board_id: &str) -> Result<Vec<List>, TrelloError> {
        self.get(&format!("boards/{board_id}/lists"), "name,closed").await
    }

    /// The board's list named exactly `name`, if any.
    pub async fn find_list(&self, board_id: &str, name: &str) -> Result<Option<List>, TrelloError> {
        let lists = self.lists(board_id).await?;
        Ok(select_list(&lists, name).cloned())
    }

    pub async fn cards(&self, list_id: &str) -> Result<Vec<Card>, TrelloError> {
        self.get(&format!("lists/{list_id}/cards"), "name,due,labels").await
    }
}
