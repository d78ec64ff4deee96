//! Result normalizer.
//!
//! Maps a raw PageSpeed body (or no body at all) into the fixed report
//! sections. Every function here is total: missing data yields the section's
//! "unavailable" default, and a body whose `lighthouseResult` does not fit the
//! partial schema yields the section's "malformed" default. Nothing here can
//! abort an audit.

use pagespeed_client::{AuditResult, Category, CategoryResult, LighthouseResult, RawAnalysis};
use tracing::warn;

use super::models::{
    MobileUsability, NormalizedDesktop, NormalizedMobile, NormalizedSeo, NormalizedTechnical,
};

/// Substrings of the final URL that mark a site as targeting the local market.
pub const LOCAL_KEYWORDS: [&str; 5] = ["miami", "florida", "fl", "south-florida", "dade"];

pub const LOCAL_SEO_RECOMMENDATION: &str = "Add Miami/South Florida keywords for better local SEO";

/// Mobile usability rubric: (audit id, penalty, issue text), in reporting order.
const USABILITY_CHECKS: [(&str, u8, &str); 4] = [
    ("viewport", 20, "Missing mobile viewport configuration"),
    ("tap-targets", 20, "Touch targets too small or too close together"),
    ("font-size", 15, "Text too small to read on mobile"),
    ("content-width", 15, "Content wider than screen"),
];

const TECHNICAL_CHECKS: [(&str, &str); 6] = [
    ("is-on-https", "Website not using HTTPS (no SSL certificate)"),
    ("uses-optimized-images", "Images not optimized for performance"),
    ("uses-text-compression", "Text compression not enabled"),
    ("image-alt", "Some images missing alt text"),
    ("meta-description", "Missing or poor meta description"),
    ("document-title", "Missing or poor page title"),
];

const SEO_CHECKS: [(&str, &str); 4] = [
    ("document-title", "Page title needs improvement"),
    ("meta-description", "Meta description missing or too short"),
    ("link-text", "Links need descriptive text"),
    ("heading-order", "Heading elements not in logical order"),
];

// =============================================================================
// Field extraction
// =============================================================================

/// Category score 0.0-1.0 as an integer 0-100. Missing or null is 0.
pub fn safe_score(category: Option<&CategoryResult>) -> u8 {
    category
        .and_then(|c| c.score)
        .map(|s| (s * 100.0).round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

/// Numeric audit value, `None` when the audit or its value is missing.
pub fn safe_numeric_value(audit: Option<&AuditResult>) -> Option<f64> {
    audit.and_then(|a| a.numeric_value)
}

/// Passed only on a perfect score of exactly 1.
pub fn audit_passed(audit: Option<&AuditResult>) -> bool {
    audit.and_then(|a| a.score) == Some(1.0)
}

/// Failed when a score is present and below 1. A missing audit is no signal.
pub fn audit_failed(audit: Option<&AuditResult>) -> bool {
    audit.and_then(|a| a.score).is_some_and(|s| s < 1.0)
}

/// Pass/fail of an audit, `None` when the payload does not carry it.
pub fn audit_signal(audit: Option<&AuditResult>) -> Option<bool> {
    audit.map(|a| audit_passed(Some(a)))
}

pub fn has_local_keywords(url: &str) -> bool {
    let lower = url.to_lowercase();
    LOCAL_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub fn analyze_mobile_usability(lighthouse: &LighthouseResult) -> MobileUsability {
    let mut score: u8 = 100;
    let mut issues = Vec::new();

    for (audit_id, penalty, issue) in USABILITY_CHECKS {
        if audit_failed(lighthouse.audit(audit_id)) {
            issues.push(issue.to_string());
            score = score.saturating_sub(penalty);
        }
    }

    MobileUsability { score, issues }
}

fn failed_checks(lighthouse: &LighthouseResult, checks: &[(&str, &str)]) -> Vec<String> {
    checks
        .iter()
        .filter(|(audit_id, _)| audit_failed(lighthouse.audit(audit_id)))
        .map(|(_, issue)| issue.to_string())
        .collect()
}

// =============================================================================
// Section normalizers
// =============================================================================

/// Shared shape of every section normalizer: absent -> `unavailable`,
/// unreadable -> `malformed`, otherwise `extract`. A missing
/// `lighthouseResult` is read as an empty one.
fn normalize_section<T>(
    raw: Option<&RawAnalysis>,
    section: &'static str,
    unavailable: fn() -> T,
    malformed: fn() -> T,
    extract: impl FnOnce(&LighthouseResult) -> T,
) -> T {
    let Some(raw) = raw else {
        return unavailable();
    };

    match raw.lighthouse() {
        Ok(lighthouse) => extract(&lighthouse.unwrap_or_default()),
        Err(e) => {
            warn!(section, error = %e, "Unexpected PageSpeed payload shape");
            malformed()
        }
    }
}

pub fn normalize_mobile(raw: Option<&RawAnalysis>) -> NormalizedMobile {
    normalize_section(
        raw,
        "mobile",
        NormalizedMobile::unavailable,
        NormalizedMobile::malformed,
        |lh| NormalizedMobile {
            performance_score: safe_score(lh.category(Category::Performance)),
            accessibility_score: safe_score(lh.category(Category::Accessibility)),
            first_contentful_paint: safe_numeric_value(lh.audit("first-contentful-paint")),
            largest_contentful_paint: safe_numeric_value(lh.audit("largest-contentful-paint")),
            first_input_delay: safe_numeric_value(lh.audit("max-potential-fid")),
            cumulative_layout_shift: safe_numeric_value(lh.audit("cumulative-layout-shift")),
            speed_index: safe_numeric_value(lh.audit("speed-index")),
            total_blocking_time: safe_numeric_value(lh.audit("total-blocking-time")),
            mobile_usability: analyze_mobile_usability(lh),
        },
    )
}

pub fn normalize_desktop(raw: Option<&RawAnalysis>) -> NormalizedDesktop {
    normalize_section(
        raw,
        "desktop",
        NormalizedDesktop::unavailable,
        NormalizedDesktop::default,
        |lh| NormalizedDesktop {
            performance_score: safe_score(lh.category(Category::Performance)),
            accessibility_score: safe_score(lh.category(Category::Accessibility)),
            first_contentful_paint: safe_numeric_value(lh.audit("first-contentful-paint")),
            largest_contentful_paint: safe_numeric_value(lh.audit("largest-contentful-paint")),
            cumulative_layout_shift: safe_numeric_value(lh.audit("cumulative-layout-shift")),
            speed_index: safe_numeric_value(lh.audit("speed-index")),
            total_blocking_time: safe_numeric_value(lh.audit("total-blocking-time")),
        },
    )
}

pub fn normalize_technical(raw: Option<&RawAnalysis>) -> NormalizedTechnical {
    normalize_section(
        raw,
        "technical",
        NormalizedTechnical::unavailable,
        NormalizedTechnical::malformed,
        |lh| NormalizedTechnical {
            issues: failed_checks(lh, &TECHNICAL_CHECKS),
            has_ssl: audit_signal(lh.audit("is-on-https")),
            has_viewport: audit_signal(lh.audit("viewport")),
            best_practices_score: safe_score(lh.category(Category::BestPractices)),
        },
    )
}

pub fn normalize_seo(raw: Option<&RawAnalysis>) -> NormalizedSeo {
    normalize_section(
        raw,
        "seo",
        NormalizedSeo::unavailable,
        NormalizedSeo::malformed,
        |lh| {
            let local = has_local_keywords(lh.final_url.as_deref().unwrap_or(""));
            NormalizedSeo {
                issues: failed_checks(lh, &SEO_CHECKS),
                seo_score: safe_score(lh.category(Category::Seo)),
                has_local_keywords: local,
                recommendations: if local {
                    Vec::new()
                } else {
                    vec![LOCAL_SEO_RECOMMENDATION.to_string()]
                },
            }
        },
    )
}
