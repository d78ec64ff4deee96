use std::time::Instant;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::domains::audit::AuditError;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct StartAuditRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAuditRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Run a full audit for one URL
pub async fn start_audit_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<StartAuditRequest>,
) -> Response {
    let start = Instant::now();

    let Some(url) = request.url.filter(|u| !u.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "URL is required",
                "example": { "url": "https://example.com", "email": "client@example.com" },
            })),
        )
            .into_response();
    };

    info!(url = %url, "Audit request started");

    match state.audit_service.audit_website(&url).await {
        Ok(report) => {
            let duration = start.elapsed().as_millis() as u64;
            if let Some(email) = request.email.as_deref() {
                info!(email, "Would send report");
            }
            info!(url = %url, duration_ms = duration, score = report.summary.overall_score, "Audit request completed");

            Json(json!({
                "success": true,
                "message": "Audit completed successfully",
                "data": report,
                "duration": duration,
            }))
            .into_response()
        }
        Err(e) => {
            let duration = start.elapsed().as_millis() as u64;
            error!(url = %url, duration_ms = duration, error = %e, "Audit request failed");
            audit_error_response(&e, duration)
        }
    }
}

/// Audit several URLs; per-URL failures are reported inline
pub async fn batch_audit_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<BatchAuditRequest>,
) -> Response {
    let start = Instant::now();

    if request.urls.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "At least one URL is required" })),
        )
            .into_response();
    }

    if request.urls.len() > state.batch_max_urls {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("Too many URLs: at most {} per batch", state.batch_max_urls),
            })),
        )
            .into_response();
    }

    let results = state.audit_service.audit_batch(&request.urls).await;
    let duration = start.elapsed().as_millis() as u64;
    let succeeded = results.iter().filter(|r| r.is_success()).count();
    info!(
        total = results.len(),
        succeeded,
        duration_ms = duration,
        "Batch audit completed"
    );

    Json(json!({
        "success": true,
        "results": results,
        "duration": duration,
    }))
    .into_response()
}

fn audit_error_response(error: &AuditError, duration: u64) -> Response {
    let mut body = json!({
        "error": error.to_string(),
        "errorName": error.kind(),
        "duration": duration,
        "timestamp": Utc::now(),
    });

    let status = match error {
        AuditError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        AuditError::UpstreamUnavailable { analysis, .. } => {
            body["detailed"] = json!({
                "mobile": analysis.mobile,
                "desktop": analysis.desktop,
                "technical": analysis.technical,
                "seo": analysis.seo,
            });
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Json(body)).into_response()
}
