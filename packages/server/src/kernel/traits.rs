// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Normalization and scoring live in domains/audit and only see these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAnalysisClient)

use std::time::Duration;

use async_trait::async_trait;
use pagespeed_client::{RawAnalysis, Result, Strategy};

// =============================================================================
// Analysis Trait (Infrastructure - external Lighthouse runs)
// =============================================================================

#[async_trait]
pub trait BaseAnalysisClient: Send + Sync {
    /// Run a full analysis (performance, accessibility, best-practices, seo)
    /// for one strategy. Exactly one outbound call, no retries.
    async fn fetch_analysis(&self, url: &str, strategy: Strategy) -> Result<RawAnalysis>;

    /// Run a performance-only mobile analysis with a short deadline.
    /// Used to check that the configured API key is accepted.
    async fn fetch_performance_probe(&self, url: &str, timeout: Duration) -> Result<RawAnalysis>;

    /// Whether requests carry an API key (otherwise the anonymous quota applies)
    fn has_api_key(&self) -> bool;
}
