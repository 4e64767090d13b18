//! Shape validation of the raw `/todos` payload.
//!
//! # Design
//! Each element is deserialized into `TodoItem` on its own so a failure can
//! name the offending index. serde's strict typing does the field checks:
//! a missing field, `null`, a number sent as text or a float in an integer
//! field are all rejected rather than coerced. Unknown extra fields are
//! ignored. The first bad element fails the whole payload.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, SchemaViolation};
use crate::types::TodoItem;

/// Convert a raw JSON payload into todo items, preserving order.
pub fn validate_todos(raw: Value) -> Result<Vec<TodoItem>, ApiError> {
    let items = match raw {
        Value::Array(items) => items,
        other => {
            return Err(ApiError::SchemaValidation(SchemaViolation {
                index: None,
                message: format!("expected an array, found {}", describe(&other)),
            }))
        }
    };

    let todos = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!("{}", e))?;

    debug!("validated {} todo items", todos.len());
    Ok(todos)
}

fn validate_item(index: usize, item: Value) -> Result<TodoItem, ApiError> {
    let violation = |message: String| {
        ApiError::SchemaValidation(SchemaViolation {
            index: Some(index),
            message,
        })
    };

    if !item.is_object() {
        return Err(violation(format!(
            "expected an object, found {}",
            describe(&item)
        )));
    }

    let todo: TodoItem = serde_json::from_value(item).map_err(|e| violation(e.to_string()))?;
    if todo.title.is_empty() {
        return Err(violation("field `title` must not be empty".to_string()));
    }
    Ok(todo)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
