//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::audit::AuditService;
use crate::kernel::BaseAnalysisClient;
use crate::server::routes::{
    batch_audit_handler, debug_pagespeed_handler, health_handler, not_found_handler,
    simple_test_handler, start_audit_handler, test_api_key_handler, test_pagespeed_handler,
    test_score_extraction_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub audit_service: Arc<AuditService>,
    pub batch_max_urls: usize,
}

impl AppState {
    pub fn new(client: Arc<dyn BaseAnalysisClient>, batch_concurrency: usize, batch_max_urls: usize) -> Self {
        Self {
            audit_service: Arc::new(
                AuditService::new(client).with_batch_concurrency(batch_concurrency),
            ),
            batch_max_urls,
        }
    }

    pub fn client(&self) -> &dyn BaseAnalysisClient {
        self.audit_service.client().as_ref()
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/simple-test", get(simple_test_handler))
        .route("/api/test-pagespeed", get(test_pagespeed_handler))
        .route("/api/test-score-extraction", get(test_score_extraction_handler))
        .route("/api/audit/start", post(start_audit_handler))
        .route("/api/audit/batch", post(batch_audit_handler))
        .route("/api/debug-pagespeed/:url", get(debug_pagespeed_handler))
        .route("/api/test-api-key", get(test_api_key_handler))
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
