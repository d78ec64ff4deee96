//! Integration tests for the HTTP API.
//!
//! Each test sends requests through the full router (CORS, timeout and
//! trace layers included) with a scripted analysis client behind it.

mod common;

use audit_core::kernel::{MockAnalysisClient, MockOutcome, Strategy};
use axum::http::StatusCode;
use serde_json::json;

use crate::common::{desktop_body, lighthouse_body, struggling_body, TestHarness};

fn healthy_client() -> MockAnalysisClient {
    MockAnalysisClient::new()
        .with_mobile(lighthouse_body("https://example.com/", 0.92, 0.95))
        .with_desktop(desktop_body(0.98))
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ready_and_key_status() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "SiteLaunch Audit API is running!");
    assert_eq!(body["auditSystemReady"], true);
    assert_eq!(body["apiKeyConfigured"], false);
    assert!(body["timestamp"].is_string());
}

// =============================================================================
// Single audit
// =============================================================================

#[tokio::test]
async fn start_audit_requires_url() {
    let harness = TestHarness::new(healthy_client());

    let (status, body) = harness
        .post("/api/audit/start", json!({ "email": "owner@example.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
    assert_eq!(body["example"]["url"], "https://example.com");
    assert!(harness.client.calls().is_empty());
}

#[tokio::test]
async fn start_audit_returns_report() {
    let harness = TestHarness::new(healthy_client());

    let (status, body) = harness
        .post(
            "/api/audit/start",
            json!({ "url": "example.com", "email": "owner@example.com" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Audit completed successfully");
    assert!(body["duration"].is_u64());

    let report = &body["data"];
    assert_eq!(report["summary"]["url"], "https://example.com");
    assert_eq!(report["summary"]["overallScore"], 92);
    assert_eq!(report["summary"]["grade"], "A");
    assert_eq!(report["summary"]["poweredBy"], "Google PageSpeed Insights");
    assert_eq!(report["criticalIssues"], json!([]));
    assert_eq!(report["recommendations"][0]["category"], "Local SEO");
    assert_eq!(report["detailed"]["technical"]["hasSSL"], true);
    assert_eq!(report["detailed"]["mobile"]["mobileUsability"]["score"], 100);
}

#[tokio::test]
async fn start_audit_serializes_critical_issues() {
    let harness = TestHarness::new(
        MockAnalysisClient::new()
            .with_mobile(struggling_body())
            .with_outcome(Strategy::Desktop, MockOutcome::Timeout),
    );

    let (status, body) = harness
        .post("/api/audit/start", json!({ "url": "miami-bakery.com" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    let report = &body["data"];
    assert_eq!(report["criticalIssues"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["criticalIssues"][0]["type"], "Mobile Performance");
    assert_eq!(report["criticalIssues"][0]["severity"], "High");
    assert_eq!(report["criticalIssues"][0]["googleMetric"], true);
    assert_eq!(report["warning"], "Partial results: Desktop analysis failed.");
}

#[tokio::test]
async fn start_audit_rejects_invalid_url() {
    let harness = TestHarness::new(healthy_client());

    let (status, body) = harness
        .post("/api/audit/start", json!({ "url": "http://" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorName"], "InvalidInput");
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid URL provided")));
}

#[tokio::test]
async fn start_audit_maps_total_failure_to_bad_gateway() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness
        .post("/api/audit/start", json!({ "url": "example.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["errorName"], "UpstreamUnavailable");
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Both mobile and desktop")));
    assert!(body["timestamp"].is_string());
    assert!(body["duration"].is_u64());
    assert_eq!(harness.client.calls().len(), 2);
}

// =============================================================================
// Batch audit
// =============================================================================

#[tokio::test]
async fn batch_audit_returns_entries_in_order() {
    let harness = TestHarness::new(healthy_client().failing_url("https://down.example.com"));

    let (status, body) = harness
        .post(
            "/api/audit/batch",
            json!({ "urls": ["example.com", "down.example.com"] }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let results = body["results"].as_array().cloned().unwrap_or_default();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["url"], "example.com");
    assert_eq!(results[0]["report"]["summary"]["overallScore"], 92);
    assert!(results[0].get("error").is_none());
    assert_eq!(results[1]["url"], "down.example.com");
    assert!(results[1]["error"].is_string());
    assert!(results[1].get("report").is_none());
}

#[tokio::test]
async fn batch_audit_rejects_empty_list() {
    let harness = TestHarness::new(healthy_client());

    let (status, body) = harness.post("/api/audit/batch", json!({ "urls": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn batch_audit_enforces_url_limit() {
    let harness = TestHarness::with_batch_limit(healthy_client(), 2);

    let (status, body) = harness
        .post(
            "/api/audit/batch",
            json!({ "urls": ["a.example.com", "b.example.com", "c.example.com"] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| e.contains("at most 2")));
    assert!(harness.client.calls().is_empty());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[tokio::test]
async fn debug_pagespeed_summarizes_raw_payload() {
    let harness = TestHarness::new(healthy_client());

    let (status, body) = harness.get("/api/debug-pagespeed/example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["testUrl"], "https://example.com");

    let raw = &body["rawResponse"];
    assert_eq!(raw["hasLighthouseResult"], true);
    assert_eq!(
        raw["categories"],
        json!(["accessibility", "best-practices", "performance", "seo"])
    );
    assert_eq!(raw["categoryScores"]["performance"]["score"], 0.92);
    assert_eq!(raw["categoryScores"]["performance"]["scoreX100"], 92);
    assert_eq!(raw["loadingExperience"], "present");
    assert_eq!(raw["originLoadingExperience"], "present");

    assert_eq!(body["scoreBreakdown"]["primary"], 92);
    assert!(body["scoreBreakdown"]["weighted"].is_u64());
    assert!(body["scoreBreakdown"]["average"].is_u64());

    assert_eq!(
        harness.client.calls(),
        vec![("https://example.com".to_string(), Strategy::Mobile)]
    );
}

#[tokio::test]
async fn debug_pagespeed_reports_upstream_failure() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/debug-pagespeed/example.com").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Debug test failed");
    assert_eq!(body["errorName"], "UpstreamUnavailable");
}

#[tokio::test]
async fn test_api_key_without_key_warns() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/test-api-key").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "warning");
    assert_eq!(body["message"], "No API key configured - using free tier");
    assert!(harness.client.calls().is_empty());
}

#[tokio::test]
async fn test_api_key_accepted() {
    let harness = TestHarness::new(
        MockAnalysisClient::new()
            .with_api_key()
            .with_probe(MockOutcome::Body(lighthouse_body(
                "https://www.google.com/",
                0.8,
                0.9,
            ))),
    );

    let (status, body) = harness.get("/api/test-api-key").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "API key is valid and working");
    assert_eq!(body["hasPerformanceScore"], true);
}

#[tokio::test]
async fn test_api_key_rejected() {
    let harness = TestHarness::new(MockAnalysisClient::new().with_api_key());

    let (status, body) = harness.get("/api/test-api-key").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "API key test failed");
    assert_eq!(body["error"], "API returned status 503");
}

#[tokio::test]
async fn test_pagespeed_audits_known_site() {
    let harness = TestHarness::new(healthy_client());

    let (status, body) = harness.get("/api/test-pagespeed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "PageSpeed API is working");
    assert_eq!(body["testUrl"], "https://www.google.com");
    assert_eq!(body["score"], 92);

    let mut calls = harness.client.calls();
    calls.sort_by_key(|(_, strategy)| strategy.as_str());
    assert_eq!(
        calls,
        vec![
            ("https://www.google.com".to_string(), Strategy::Desktop),
            ("https://www.google.com".to_string(), Strategy::Mobile),
        ]
    );
}

#[tokio::test]
async fn test_pagespeed_reports_unmeasured_score_as_unknown() {
    let harness = TestHarness::new(
        MockAnalysisClient::new()
            .with_outcome(Strategy::Mobile, MockOutcome::RateLimited)
            .with_desktop(desktop_body(0.9)),
    );

    let (status, body) = harness.get("/api/test-pagespeed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], "unknown");
}

#[tokio::test]
async fn test_pagespeed_failure_is_server_error() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/test-pagespeed").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "PageSpeed API failed");
    assert_eq!(body["errorName"], "UpstreamUnavailable");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_score_extraction_reports_fixed_cases() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/test-score-extraction").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["tests"],
        json!({ "mockScore85": 85, "nullScore": 0, "undefinedScore": 0 })
    );
    assert!(harness.client.calls().is_empty());
}

#[tokio::test]
async fn simple_test_answers() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/simple-test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Simple test works!");
    assert!(body["timestamp"].is_string());
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn unknown_route_lists_endpoints() {
    let harness = TestHarness::new(MockAnalysisClient::new());

    let (status, body) = harness.get("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["requestedPath"], "/api/nope");
    assert_eq!(body["availableEndpoints"].as_array().map(Vec::len), Some(8));
}
