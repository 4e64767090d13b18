use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, generated_todos, sample_todos, Scenario, Todo};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn list_returns_sample_todos_in_order() {
    let resp = app(Scenario::Todos(sample_todos()))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, sample_todos());
}

#[tokio::test]
async fn list_sends_camel_case_fields() {
    let resp = app(Scenario::Todos(generated_todos(1)))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json[0]["userId"], 1);
    assert_eq!(json[0]["title"], "todo 1");
}

#[tokio::test]
async fn list_empty() {
    let resp = app(Scenario::Todos(Vec::new()))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"[]");
}

#[tokio::test]
async fn status_scenario_returns_empty_body() {
    let resp = app(Scenario::Status(500))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn raw_body_scenario_is_served_verbatim_as_json() {
    let resp = app(Scenario::RawBody(b"invalid json".to_vec()))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(&body_bytes(resp).await[..], b"invalid json");
}

#[tokio::test]
async fn raw_body_scenario_keeps_non_utf8_bytes() {
    let resp = app(Scenario::RawBody(b"[\"\xff\"]".to_vec()))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(&body_bytes(resp).await[..], b"[\"\xff\"]");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let resp = app(Scenario::Todos(sample_todos()))
        .oneshot(get("/users"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
