//! Validated fetch of the upstream todo list.
//!
//! # Overview
//! `fetch_todos` issues one GET to `/todos`, rejects non-2xx statuses and
//! undecodable bodies, then shape-checks every element into a `TodoItem`.
//! The result is either the complete list in server order or one
//! `ApiError` naming the failure class; partial data is never returned.
//!
//! # Design
//! - `TodoClient` builds the request and parses the response as plain data
//!   (`HttpRequest` / `HttpResponse`); `Fetcher` is the only I/O.
//! - `validate` is a pure function over `serde_json::Value`.
//! - Truncation, loading state and caching belong to the caller; see the
//!   `todo-view` binary.

pub mod client;
pub mod error;
pub mod fetch;
pub mod http;
pub mod types;
pub mod validate;

pub use client::{fetch_todos, TodoClient, DEFAULT_BASE_URL, TODOS_PATH};
pub use error::{ApiError, ErrorKind, SchemaViolation};
pub use fetch::Fetcher;
pub use http::{HttpRequest, HttpResponse};
pub use types::TodoItem;
pub use validate::validate_todos;
