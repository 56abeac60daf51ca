use axum::{
    body::{Body, Bytes},
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{error::AppError, router::router, state::AppState};


/// Sends one request through the full router and returns the status and raw body.
async fn send(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router()
        .with_state(AppState::new(db.clone()))
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body)
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

fn as_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}
