// HTTP routes
pub mod audit;
pub mod debug;
pub mod health;

pub use audit::*;
pub use debug::*;
pub use health::*;

use axum::{http::StatusCode, http::Uri, Json};
use serde_json::{json, Value};

/// Routes advertised by the 404 handler
pub const AVAILABLE_ENDPOINTS: [&str; 8] = [
    "GET /api/health",
    "GET /api/simple-test",
    "GET /api/test-pagespeed",
    "GET /api/test-api-key",
    "GET /api/debug-pagespeed/:url",
    "GET /api/test-score-extraction",
    "POST /api/audit/start",
    "POST /api/audit/batch",
];

/// Fallback for unknown routes
pub async fn not_found_handler(uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::warn!(path = %uri.path(), "Route not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "requestedPath": uri.path(),
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}
