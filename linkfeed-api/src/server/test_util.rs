use crate::server::{ServerState, routes};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use linkfeed_common::snowflake::{ProcessId, WorkerId};
use linkfeed_store::{Latency, MockStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A router over a freshly seeded store with no simulated latency.
pub fn app() -> Router {
    let store = MockStore::new(
        WorkerId::new_unchecked(1),
        ProcessId::new_unchecked(1),
        Latency::none(),
    );
    routes().with_state(ServerState::new(Arc::new(store)))
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

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

pub async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    request(&app(), method, uri, body).await
}
