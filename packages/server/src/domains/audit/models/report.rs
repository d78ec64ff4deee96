use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{NormalizedDesktop, NormalizedMobile, NormalizedSeo, NormalizedTechnical};

pub const POWERED_BY: &str = "Google PageSpeed Insights";

/// Letter grade derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub url: String,
    pub overall_score: u8,
    pub grade: Grade,
    pub timestamp: DateTime<Utc>,
    pub powered_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub severity: Severity,
    pub issue: String,
    pub impact: String,
    pub google_metric: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub expected_impact: String,
    pub timeline: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedResults {
    pub mobile: NormalizedMobile,
    pub desktop: NormalizedDesktop,
    pub technical: NormalizedTechnical,
    pub seo: NormalizedSeo,
}

/// Final audit report returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub summary: ReportSummary,
    pub critical_issues: Vec<CriticalIssue>,
    pub recommendations: Vec<Recommendation>,
    pub detailed: DetailedResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Outcome for one URL of a batch audit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AuditReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        self.report.is_some()
    }
}
