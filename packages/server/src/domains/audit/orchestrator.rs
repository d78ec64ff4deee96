//! Audit orchestrator - the single entry point for website audits.

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use pagespeed_client::{RawAnalysis, Strategy};
use tracing::{info, warn};

use super::error::{AuditError, Result};
use super::models::{Analysis, AuditReport, AuditRequest, BatchEntry};
use super::normalizer::{normalize_desktop, normalize_mobile, normalize_seo, normalize_technical};
use super::report_builder::build_report;
use super::scoring::{primary_score, ScoreComponents};
use crate::kernel::BaseAnalysisClient;

const DEFAULT_BATCH_CONCURRENCY: usize = 2;

const BOTH_FAILED_MESSAGE: &str = "Both mobile and desktop PageSpeed analysis failed. Google PageSpeed Insights may be experiencing issues.";

/// Drives validation, the two-strategy fan-out, and the
/// normalize -> score -> report pipeline.
#[derive(Clone)]
pub struct AuditService {
    client: Arc<dyn BaseAnalysisClient>,
    batch_concurrency: usize,
}

impl AuditService {
    pub fn new(client: Arc<dyn BaseAnalysisClient>) -> Self {
        Self {
            client,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Number of URLs audited at once by `audit_batch` (minimum 1)
    pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    pub fn client(&self) -> &Arc<dyn BaseAnalysisClient> {
        &self.client
    }

    /// Audit one website and build its report.
    pub async fn audit_website(&self, raw_url: &str) -> Result<AuditReport> {
        let request = AuditRequest::parse(raw_url)?;
        let analysis = self.analyze(&request).await?;
        info!(url = %analysis.url, score = analysis.score, "PageSpeed audit completed");
        Ok(build_report(analysis))
    }

    /// Fetch both strategies concurrently and produce the scored analysis.
    ///
    /// Fails only when neither strategy produced data.
    pub async fn analyze(&self, request: &AuditRequest) -> Result<Analysis> {
        let url = request.url();
        let timestamp = Utc::now();
        info!(url, "Starting PageSpeed analysis");

        let (mobile_raw, desktop_raw) = tokio::join!(
            self.fetch(url, Strategy::Mobile),
            self.fetch(url, Strategy::Desktop),
        );

        if mobile_raw.is_none() && desktop_raw.is_none() {
            warn!(url, "Both PageSpeed strategies failed");
            return Err(AuditError::UpstreamUnavailable {
                message: BOTH_FAILED_MESSAGE.to_string(),
                analysis: Box::new(Analysis::unavailable(url, timestamp, BOTH_FAILED_MESSAGE)),
            });
        }

        let mobile = normalize_mobile(mobile_raw.as_ref());
        let desktop = normalize_desktop(desktop_raw.as_ref());
        // Technical and SEO findings come from the mobile run only
        let technical = normalize_technical(mobile_raw.as_ref());
        let seo = normalize_seo(mobile_raw.as_ref());

        let score = primary_score(&ScoreComponents::from_sections(
            &mobile, &desktop, &technical, &seo,
        ));

        let warning = match (&mobile_raw, &desktop_raw) {
            (None, Some(_)) => Some("Partial results: Mobile analysis failed.".to_string()),
            (Some(_), None) => Some("Partial results: Desktop analysis failed.".to_string()),
            _ => None,
        };

        Ok(Analysis {
            url: url.to_string(),
            timestamp,
            mobile,
            desktop,
            technical,
            seo,
            score,
            warning,
            error: None,
        })
    }

    /// Audit several websites. Each URL is independent: a failure is recorded
    /// on its entry and never aborts the others. Results follow input order.
    pub async fn audit_batch(&self, urls: &[String]) -> Vec<BatchEntry> {
        info!(count = urls.len(), concurrency = self.batch_concurrency, "Starting batch audit");

        stream::iter(urls.iter().cloned())
            .map(|url| async move {
                match self.audit_website(&url).await {
                    Ok(report) => BatchEntry {
                        url,
                        report: Some(report),
                        error: None,
                    },
                    Err(e) => {
                        warn!(url = %url, error = %e, "Batch audit entry failed");
                        BatchEntry {
                            url,
                            report: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }

    /// One strategy; any client failure becomes `None`.
    async fn fetch(&self, url: &str, strategy: Strategy) -> Option<RawAnalysis> {
        match self.client.fetch_analysis(url, strategy).await {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!(url, %strategy, kind = e.kind(), error = %e, "PageSpeed analysis failed");
                None
            }
        }
    }
}
