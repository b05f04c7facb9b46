use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use stmtdb::api;
use stmtdb::service::StatementService;
use stmtdb::storage::InMemoryStore;

fn app() -> Router {
    let store = Arc::new(InMemoryStore::new());
    api::router(Arc::new(StatementService::new(store)))
}

async fn body_json(response: Response<axum::body::BoxBody>) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_latest_on_empty_store_body() {
    let response = app().oneshot(get("/statements/0-0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"message": "No statement found."})
    );
}

#[tokio::test]
async fn test_get_missing_period_body() {
    let response = app().oneshot(get("/statements/2024-3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Statement not found"})
    );
}

#[tokio::test]
async fn test_create_then_duplicate_statuses() {
    let app = app();
    let payload = json!({"year": 2024, "month": 3, "amount": "150.00"});

    let response = app
        .clone()
        .oneshot(post_json("/statements", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Successfully created."})
    );

    let response = app
        .clone()
        .oneshot(post_json("/statements", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Cannot create an already existent statement"})
    );
}

#[tokio::test]
async fn test_create_without_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/statements")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_returns_no_content() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/statements/2024-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_unknown_route_body() {
    let response = app().oneshot(get("/accounts")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Not Found"}));
}
