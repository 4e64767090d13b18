//! Domain types for the todos endpoint.
//!
//! # Design
//! `TodoItem` mirrors the upstream JSON record but is defined independently
//! of the mock-server crate; integration tests catch any schema drift
//! between the two. Field names follow Rust conventions, with serde renames
//! for the camelCase wire names.

use serde::{Deserialize, Serialize};

/// A single validated todo record.
///
/// Only ever constructed through [`crate::validate::validate_todos`] (or
/// directly in tests), so every instance has all four fields and a
/// non-empty title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}
