use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    message: &'static str,
    audit_system_ready: bool,
    api_key_configured: bool,
}

/// Health check endpoint
///
/// The service holds no connections of its own, so being able to answer is
/// the health signal. Reports whether PageSpeed requests carry an API key.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    tracing::debug!("Health check requested");
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        message: "SiteLaunch Audit API is running!",
        audit_system_ready: true,
        api_key_configured: state.client().has_api_key(),
    })
}
