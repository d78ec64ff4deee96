//! Diagnostics for operators: raw payload inspection and API key checks.
//!
//! This is the only place the alternate scoring formulas are surfaced.

use std::collections::BTreeMap;
use std::time::Duration;

use pagespeed_client::{PageSpeedError, RawAnalysis, Strategy};
use serde::Serialize;

use super::normalizer::{normalize_desktop, normalize_mobile, normalize_seo, normalize_technical, safe_score};
use super::scoring::{ScoreBreakdown, ScoreComponents};
use crate::kernel::BaseAnalysisClient;

pub const PROBE_URL: &str = "https://www.google.com";
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: Option<f64>,
    #[serde(rename = "scoreX100")]
    pub score_x100: u8,
}

/// Summary of one raw mobile payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInspection {
    pub has_lighthouse_result: bool,
    pub categories: Vec<String>,
    pub category_scores: BTreeMap<String, CategoryScore>,
    pub loading_experience: &'static str,
    pub origin_loading_experience: &'static str,
    #[serde(skip)]
    pub score_breakdown: ScoreBreakdown,
}

impl RawInspection {
    /// Describe a raw payload. Never fails: an unreadable `lighthouseResult`
    /// simply reports no categories.
    pub fn from_raw(raw: &RawAnalysis) -> Self {
        let lighthouse = raw.lighthouse().ok().flatten().unwrap_or_default();

        let category_scores = lighthouse
            .category_names()
            .into_iter()
            .map(|name| {
                let category = lighthouse.category_named(&name);
                let entry = CategoryScore {
                    score: category.and_then(|c| c.score),
                    score_x100: safe_score(category),
                };
                (name, entry)
            })
            .collect();

        // Mobile-only view: the desktop section stays at its defaults
        let mobile = normalize_mobile(Some(raw));
        let desktop = normalize_desktop(None);
        let technical = normalize_technical(Some(raw));
        let seo = normalize_seo(Some(raw));
        let components = ScoreComponents::from_sections(&mobile, &desktop, &technical, &seo);

        Self {
            has_lighthouse_result: raw.has_lighthouse_result(),
            categories: lighthouse.category_names(),
            category_scores,
            loading_experience: presence(raw.has_loading_experience()),
            origin_loading_experience: presence(raw.has_origin_loading_experience()),
            score_breakdown: ScoreBreakdown::compute(&components),
        }
    }
}

/// Run one mobile analysis and describe it.
pub async fn inspect_url(
    client: &dyn BaseAnalysisClient,
    url: &str,
) -> Result<RawInspection, PageSpeedError> {
    let raw = client.fetch_analysis(url, Strategy::Mobile).await?;
    Ok(RawInspection::from_raw(&raw))
}

fn presence(present: bool) -> &'static str {
    if present {
        "present"
    } else {
        "missing"
    }
}

/// Outcome of checking the configured API key
#[derive(Debug)]
pub enum ApiKeyProbe {
    NotConfigured,
    Valid { has_performance_score: bool },
    Rejected { message: String },
}

/// Issue a single performance-only request to confirm the key is accepted.
pub async fn probe_api_key(client: &dyn BaseAnalysisClient) -> ApiKeyProbe {
    if !client.has_api_key() {
        return ApiKeyProbe::NotConfigured;
    }

    match client.fetch_performance_probe(PROBE_URL, PROBE_TIMEOUT).await {
        Ok(raw) => {
            let has_performance_score = raw
                .lighthouse()
                .ok()
                .flatten()
                .and_then(|lh| lh.category(pagespeed_client::Category::Performance).and_then(|c| c.score))
                .is_some_and(|s| s > 0.0);
            ApiKeyProbe::Valid {
                has_performance_score,
            }
        }
        Err(e) => {
            let message = match &e {
                PageSpeedError::Upstream { status: 403, .. } => {
                    "API key is invalid or lacks permissions".to_string()
                }
                PageSpeedError::RateLimited => "API quota exceeded".to_string(),
                PageSpeedError::Timeout { .. } => "API key test timeout".to_string(),
                other => match other.status() {
                    Some(status) => format!("API returned status {}", status),
                    None => other.to_string(),
                },
            };
            ApiKeyProbe::Rejected { message }
        }
    }
}
