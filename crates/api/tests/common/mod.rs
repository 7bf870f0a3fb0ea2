//! Shared helpers for the api integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use api::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use db::{DbPool, SqliteStore};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a freshly seeded in-memory database.
pub async fn seeded_app() -> (Router, DbPool) {
    let pool = db::pool::connect_in_memory()
        .await
        .expect("in-memory database should open");
    db::seed::seed(&pool).await.expect("seeding should succeed");
    (api::router(AppState::from_pool(pool.clone())), pool)
}

/// Router whose store is unreachable: the pool is closed before any request.
pub async fn app_with_closed_store() -> Router {
    let pool = db::pool::connect_in_memory()
        .await
        .expect("in-memory database should open");
    let store = Arc::new(SqliteStore::new(pool.clone()));
    let app = api::router(AppState::new(store.clone(), store));
    pool.close().await;
    app
}

/// Send one request and decode the JSON response body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Field identifiers named by a `{"error": [violation, ...]}` body.
pub fn violation_paths(body: &Value) -> Vec<String> {
    body["error"]
        .as_array()
        .expect("error should be a list of violations")
        .iter()
        .map(|v| v["path"].as_str().unwrap().to_string())
        .collect()
}
