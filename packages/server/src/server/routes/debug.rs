// Operator diagnostics: self checks, raw payload inspection and API key check

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use pagespeed_client::CategoryResult;
use serde_json::json;
use tracing::{error, info};

use crate::domains::audit::normalizer::safe_score;
use crate::domains::audit::{inspect_url, probe_api_key, ApiKeyProbe};
use crate::server::app::AppState;

/// Target of the end-to-end self check
pub const SELF_TEST_URL: &str = "https://www.google.com";

/// Liveness check that touches nothing but the router
pub async fn simple_test_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Simple test works!",
        "timestamp": Utc::now(),
    }))
}

/// Run a full audit of a known-good site through the real pipeline
pub async fn test_pagespeed_handler(Extension(state): Extension<AppState>) -> Response {
    info!(url = SELF_TEST_URL, "PageSpeed self test");

    match state.audit_service.audit_website(SELF_TEST_URL).await {
        Ok(report) => {
            let score = match report.summary.overall_score {
                0 => json!("unknown"),
                n => json!(n),
            };
            Json(json!({
                "status": "success",
                "message": "PageSpeed API is working",
                "testUrl": SELF_TEST_URL,
                "score": score,
            }))
            .into_response()
        }
        Err(e) => {
            error!(error = %e, kind = e.kind(), "PageSpeed self test failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "PageSpeed API failed",
                    "error": e.to_string(),
                    "errorName": e.kind(),
                })),
            )
                .into_response()
        }
    }
}

/// Exercise score extraction on fixed inputs
pub async fn test_score_extraction_handler() -> Json<serde_json::Value> {
    let category = CategoryResult {
        score: Some(0.85),
        title: Some("Performance".to_string()),
    };
    let unscored = CategoryResult::default();

    Json(json!({
        "status": "success",
        "tests": {
            "mockScore85": safe_score(Some(&category)),
            "nullScore": safe_score(Some(&unscored)),
            "undefinedScore": safe_score(None),
        },
    }))
}

/// Run one mobile analysis of `https://{url}` and summarize the raw payload
pub async fn debug_pagespeed_handler(
    Extension(state): Extension<AppState>,
    Path(url): Path<String>,
) -> Response {
    let test_url = format!("https://{}", url);
    info!(url = %test_url, "Debug PageSpeed inspection");

    match inspect_url(state.client(), &test_url).await {
        Ok(inspection) => Json(json!({
            "status": "success",
            "testUrl": test_url,
            "rawResponse": inspection,
            "scoreBreakdown": inspection.score_breakdown,
        }))
        .into_response(),
        Err(e) => {
            error!(url = %test_url, error = %e, "Debug PageSpeed inspection failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "status": "error",
                    "message": "Debug test failed",
                    "error": e.to_string(),
                    "errorName": e.kind(),
                })),
            )
                .into_response()
        }
    }
}

/// Check that the configured API key is accepted
pub async fn test_api_key_handler(Extension(state): Extension<AppState>) -> Response {
    match probe_api_key(state.client()).await {
        ApiKeyProbe::NotConfigured => Json(json!({
            "status": "warning",
            "message": "No API key configured - using free tier",
        }))
        .into_response(),
        ApiKeyProbe::Valid {
            has_performance_score,
        } => Json(json!({
            "status": "success",
            "message": "API key is valid and working",
            "hasPerformanceScore": has_performance_score,
        }))
        .into_response(),
        ApiKeyProbe::Rejected { message } => {
            error!(error = %message, "API key test failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "API key test failed",
                    "error": message,
                })),
            )
                .into_response()
        }
    }
}
