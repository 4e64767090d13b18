use std::{io, net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Wire shape of an upstream todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

/// What `GET /todos` answers with.
#[derive(Clone, Debug)]
pub enum Scenario {
    /// 200 with the todos as a JSON array.
    Todos(Vec<Todo>),
    /// The given status with an empty body.
    Status(u16),
    /// 200 with these exact bytes, labelled `application/json`.
    RawBody(Vec<u8>),
}

pub fn app(scenario: Scenario) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .with_state(Arc::new(scenario))
}

pub async fn run(listener: TcpListener, scenario: Scenario) -> Result<(), io::Error> {
    axum::serve(listener, app(scenario)).await
}

/// Serve `scenario` on an ephemeral loopback port in the background and
/// return the bound address.
pub async fn spawn(scenario: Scenario) -> Result<SocketAddr, io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(run(listener, scenario));
    Ok(addr)
}

/// The three records the upstream service returns first.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            user_id: 1,
            title: "delectus aut autem".to_string(),
            completed: false,
        },
        Todo {
            id: 2,
            user_id: 1,
            title: "quis ut nam facilis et officia qui".to_string(),
            completed: false,
        },
        Todo {
            id: 3,
            user_id: 1,
            title: "fugiat veniam minus".to_string(),
            completed: false,
        },
    ]
}

/// `count` records laid out like the upstream data set: twenty per user,
/// ids starting at 1.
pub fn generated_todos(count: usize) -> Vec<Todo> {
    (1..=count as i64)
        .map(|id| Todo {
            id,
            user_id: (id - 1) / 20 + 1,
            title: format!("todo {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

async fn list_todos(State(scenario): State<Arc<Scenario>>) -> Response {
    match scenario.as_ref() {
        Scenario::Todos(todos) => Json(todos.clone()).into_response(),
        Scenario::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Scenario::RawBody(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_user_id() {
        let todo = Todo {
            id: 1,
            user_id: 4,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 4);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn sample_todos_are_ordered_by_id() {
        let ids: Vec<i64> = sample_todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn generated_todos_assign_twenty_per_user() {
        let todos = generated_todos(41);
        assert_eq!(todos.len(), 41);
        assert_eq!(todos[0].user_id, 1);
        assert_eq!(todos[19].user_id, 1);
        assert_eq!(todos[20].user_id, 2);
        assert_eq!(todos[40].user_id, 3);
        assert!(todos.iter().all(|t| !t.title.is_empty()));
    }

    #[test]
    fn generated_todos_empty() {
        assert!(generated_todos(0).is_empty());
    }
}
