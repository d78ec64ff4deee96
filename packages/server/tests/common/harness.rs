// Test harness: the full router wired to a scripted analysis client

use std::sync::Arc;
use std::time::Duration;

use audit_core::kernel::MockAnalysisClient;
use audit_core::server::{build_app, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub client: Arc<MockAnalysisClient>,
}

impl TestHarness {
    pub fn new(client: MockAnalysisClient) -> Self {
        Self::with_batch_limit(client, 10)
    }

    pub fn with_batch_limit(client: MockAnalysisClient, batch_max_urls: usize) -> Self {
        let client = Arc::new(client);
        let state = AppState::new(client.clone(), 2, batch_max_urls);
        Self {
            app: build_app(state, Duration::from_secs(30)),
            client,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
