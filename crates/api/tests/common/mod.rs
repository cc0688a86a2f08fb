#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use todo_api::config::{LogFormat, ServerConfig};
use todo_api::router::build_app_router;
use todo_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        db_max_connections: 5,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn delete_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::DELETE, uri, Body::from(json.to_string())).await
}

/// Send a raw (possibly malformed) body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> Response {
    send(app, method, uri, Body::from(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Create a todo through the API and return its id.
pub async fn create_todo(pool: &PgPool, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/todos",
        serde_json::json!({ "title": title }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().unwrap()
}

/// Assert an error body has exactly one key, `error`, with the given message.
pub fn assert_error_body(json: &serde_json::Value, expected: &str) {
    let object = json.as_object().expect("error body must be an object");
    assert_eq!(object.len(), 1, "error body must only contain `error`: {json}");
    assert_eq!(json["error"], expected);
}
