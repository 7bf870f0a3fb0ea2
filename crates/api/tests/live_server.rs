//! End-to-end scenario against a real server bound to a local port.

use api::AppState;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[tokio::test]
async fn musician_lifecycle_over_http() {
    let pool = db::pool::connect_in_memory().await.unwrap();
    db::seed::seed(&pool).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let app = api::router(AppState::from_pool(pool.clone()));
    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    let client = reqwest::Client::new();

    // List the seed data.
    let response = client.get(format!("{base}/musicians")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let musicians: Vec<Value> = response.json().await.unwrap();
    assert_eq!(musicians.len(), 3);
    assert!(musicians.iter().any(|m| m["name"] == "Jimi Hendrix"));

    // Create.
    let response = client
        .post(format!("{base}/musicians"))
        .json(&json!({ "name": "Freddie Mercury", "instrument": "Vocals" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    // Update.
    let response = client
        .put(format!("{base}/musicians/{id}"))
        .json(&json!({ "name": "Freddie M.", "instrument": "Piano" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "Freddie M.");

    // Delete.
    let response = client
        .delete(format!("{base}/musicians/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = response.json().await.unwrap();
    assert_eq!(deleted["message"], "Musician deleted");

    // Gone.
    let response = client
        .get(format!("{base}/musicians/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.abort();
    db::pool::close_pool(pool).await;
}
