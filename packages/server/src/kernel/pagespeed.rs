use std::time::Duration;

use async_trait::async_trait;
use pagespeed_client::{Category, PageSpeedClient, RawAnalysis, Result, Strategy};

use super::BaseAnalysisClient;

/// PageSpeed Insights implementation of BaseAnalysisClient
#[async_trait]
impl BaseAnalysisClient for PageSpeedClient {
    async fn fetch_analysis(&self, url: &str, strategy: Strategy) -> Result<RawAnalysis> {
        self.run_pagespeed(url, strategy).await
    }

    async fn fetch_performance_probe(&self, url: &str, timeout: Duration) -> Result<RawAnalysis> {
        self.run_with_categories(url, Strategy::Mobile, &[Category::Performance], timeout)
            .await
    }

    fn has_api_key(&self) -> bool {
        PageSpeedClient::has_api_key(self)
    }
}
