use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ride_api::config::ServerConfig;
use ride_api::router::build_app_router;
use ride_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// No `DATABASE_URL`: every test app runs on in-memory storage.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9000".to_string()],
        request_timeout_secs: 30,
        app_name: "rideApp".to_string(),
        database_url: None,
        database_max_connections: 1,
    }
}

/// Build fresh in-memory state. Clone it to share storage across requests.
pub fn test_state() -> AppState {
    AppState::in_memory(test_config()).expect("test app name is a valid header token")
}

/// Build the full application router with all middleware layers over `state`.
///
/// Uses the same builder as `main.rs` so integration tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST `body` to `uri`, assert 201, and return the created JSON.
pub async fn create(state: &AppState, uri: &str, body: Value) -> Value {
    let response = post_json(build_test_app(state.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// GET the collection at `uri` and return its length.
pub async fn count(state: &AppState, uri: &str) -> usize {
    let response = get(build_test_app(state.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().len()
}
