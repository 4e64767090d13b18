//! Request builder, response parser and async entry point for `/todos`.
//!
//! # Design
//! `TodoClient` splits the operation into `build_list_todos`,
//! which produces an `HttpRequest`, and `parse_list_todos`, which consumes an
//! `HttpResponse`. Both are pure. `fetch_todos` runs the round trip through
//! the owned `Fetcher` in between and is the only async method.

use serde_json::Value;

use crate::error::ApiError;
use crate::fetch::{decode_response, Fetcher};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::TodoItem;
use crate::validate::validate_todos;

/// Base URL of the upstream todos service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Path of the todo listing, relative to the base URL.
pub const TODOS_PATH: &str = "/todos";

/// Client for the todos endpoint.
///
/// Holds the base URL and a pooled HTTP client; no state is carried between
/// calls, so concurrent `fetch_todos` calls are fully independent.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    fetcher: Fetcher,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher: Fetcher::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}{TODOS_PATH}", self.base_url),
        }
    }

    /// Check status, decode and validate a response to `build_list_todos`.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        let raw = decode_response(&response)?;
        validate_todos(raw)
    }

    /// Fetch the raw, unvalidated payload.
    pub async fn fetch_raw(&self) -> Result<Value, ApiError> {
        self.fetcher.fetch_raw(&self.build_list_todos()).await
    }

    /// Fetch and validate the full todo list.
    pub async fn fetch_todos(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.fetcher.execute(&self.build_list_todos()).await?;
        self.parse_list_todos(response)
    }
}

/// Fetch and validate the todo list from the upstream service.
pub async fn fetch_todos() -> Result<Vec<TodoItem>, ApiError> {
    TodoClient::default().fetch_todos().await
}
