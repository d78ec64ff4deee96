use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MOBILE_UNAVAILABLE: &str =
    "Unable to analyze mobile usability - PageSpeed API unavailable";
pub const MOBILE_PARSE_ERROR: &str = "Error parsing mobile data";
pub const TECHNICAL_UNAVAILABLE: &str =
    "Unable to analyze technical aspects - PageSpeed API unavailable";
pub const TECHNICAL_PARSE_ERROR: &str = "Error analyzing technical aspects";
pub const SEO_UNAVAILABLE: &str = "Unable to analyze SEO aspects - PageSpeed API unavailable";
pub const SEO_RECOMMENDATIONS_UNAVAILABLE: &str =
    "Unable to provide SEO recommendations - please try again later";
pub const SEO_PARSE_ERROR: &str = "Error analyzing SEO aspects";
pub const SEO_RECOMMENDATIONS_PARSE_ERROR: &str = "Unable to analyze SEO - please try again";

/// Fixed-penalty mobile usability rubric result (score 0-100)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobileUsability {
    pub score: u8,
    pub issues: Vec<String>,
}

/// Mobile Lighthouse run. Timings are milliseconds, `None` when not measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMobile {
    pub performance_score: u8,
    pub accessibility_score: u8,
    pub first_contentful_paint: Option<f64>,
    pub largest_contentful_paint: Option<f64>,
    pub first_input_delay: Option<f64>,
    pub cumulative_layout_shift: Option<f64>,
    pub speed_index: Option<f64>,
    pub total_blocking_time: Option<f64>,
    pub mobile_usability: MobileUsability,
}

impl NormalizedMobile {
    /// No mobile data was fetched
    pub fn unavailable() -> Self {
        Self::empty(MOBILE_UNAVAILABLE)
    }

    /// Mobile data was fetched but could not be read
    pub fn malformed() -> Self {
        Self::empty(MOBILE_PARSE_ERROR)
    }

    fn empty(reason: &str) -> Self {
        Self {
            performance_score: 0,
            accessibility_score: 0,
            first_contentful_paint: None,
            largest_contentful_paint: None,
            first_input_delay: None,
            cumulative_layout_shift: None,
            speed_index: None,
            total_blocking_time: None,
            mobile_usability: MobileUsability {
                score: 0,
                issues: vec![reason.to_string()],
            },
        }
    }
}

/// Desktop Lighthouse run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDesktop {
    pub performance_score: u8,
    pub accessibility_score: u8,
    pub first_contentful_paint: Option<f64>,
    pub largest_contentful_paint: Option<f64>,
    pub cumulative_layout_shift: Option<f64>,
    pub speed_index: Option<f64>,
    pub total_blocking_time: Option<f64>,
}

impl NormalizedDesktop {
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTechnical {
    pub issues: Vec<String>,
    #[serde(rename = "hasSSL")]
    pub has_ssl: Option<bool>,
    pub has_viewport: Option<bool>,
    pub best_practices_score: u8,
}

impl NormalizedTechnical {
    pub fn unavailable() -> Self {
        Self {
            issues: vec![TECHNICAL_UNAVAILABLE.to_string()],
            has_ssl: None,
            has_viewport: None,
            best_practices_score: 0,
        }
    }

    pub fn malformed() -> Self {
        Self {
            issues: vec![TECHNICAL_PARSE_ERROR.to_string()],
            has_ssl: Some(false),
            has_viewport: Some(false),
            best_practices_score: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSeo {
    pub issues: Vec<String>,
    pub seo_score: u8,
    pub has_local_keywords: bool,
    pub recommendations: Vec<String>,
}

impl NormalizedSeo {
    pub fn unavailable() -> Self {
        Self {
            issues: vec![SEO_UNAVAILABLE.to_string()],
            seo_score: 0,
            has_local_keywords: false,
            recommendations: vec![SEO_RECOMMENDATIONS_UNAVAILABLE.to_string()],
        }
    }

    pub fn malformed() -> Self {
        Self {
            issues: vec![SEO_PARSE_ERROR.to_string()],
            seo_score: 0,
            has_local_keywords: false,
            recommendations: vec![SEO_RECOMMENDATIONS_PARSE_ERROR.to_string()],
        }
    }
}

/// Normalized, scored result of one audit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub mobile: NormalizedMobile,
    pub desktop: NormalizedDesktop,
    pub technical: NormalizedTechnical,
    pub seo: NormalizedSeo,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Analysis {
    /// Analysis with every section at its "unavailable" default, score 0
    pub fn unavailable(url: impl Into<String>, timestamp: DateTime<Utc>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timestamp,
            mobile: NormalizedMobile::unavailable(),
            desktop: NormalizedDesktop::unavailable(),
            technical: NormalizedTechnical::unavailable(),
            seo: NormalizedSeo::unavailable(),
            score: 0,
            warning: None,
            error: Some(error.into()),
        }
    }
}
