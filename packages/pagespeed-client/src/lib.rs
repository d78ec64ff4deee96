//! Pure Google PageSpeed Insights REST API client.
//!
//! A minimal client for the PageSpeed Insights v5 `runPagespeed` endpoint.
//! One call per (url, strategy) pair, a hard client-side timeout, and a typed
//! classification of every way the call can fail. No retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use pagespeed_client::{PageSpeedClient, Strategy};
//!
//! let client = PageSpeedClient::from_env();
//!
//! let raw = client.run_pagespeed("https://example.com", Strategy::Mobile).await?;
//! if let Some(lighthouse) = raw.lighthouse()? {
//!     println!("{:?}", lighthouse.final_url);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{PageSpeedError, Result};
pub use types::{
    ApiErrorBody, AuditResult, Category, CategoryResult, LighthouseResult, RawAnalysis, Strategy,
};

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// Public PageSpeed Insights v5 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable holding the optional API key.
pub const API_KEY_ENV: &str = "GOOGLE_PAGESPEED_API_KEY";

/// Lighthouse runs routinely take 10-30 seconds; anything past this is treated as lost.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

const DEFAULT_LOCALE: &str = "en";

/// PageSpeed Insights API client.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct PageSpeedClient {
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
    locale: String,
    timeout: Duration,
}

impl PageSpeedClient {
    /// Create a client. Without an API key the API serves requests from the
    /// anonymous (lower quota) tier.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from environment variable `GOOGLE_PAGESPEED_API_KEY` (optional).
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Set a custom endpoint (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the report locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a full analysis (all four categories) for one strategy.
    pub async fn run_pagespeed(&self, url: &str, strategy: Strategy) -> Result<RawAnalysis> {
        self.run_with_categories(url, strategy, &Category::ALL, self.timeout)
            .await
    }

    /// Run an analysis restricted to `categories` with an explicit timeout.
    pub async fn run_with_categories(
        &self,
        url: &str,
        strategy: Strategy,
        categories: &[Category],
        timeout: Duration,
    ) -> Result<RawAnalysis> {
        let start = std::time::Instant::now();
        info!(url, %strategy, "Running PageSpeed analysis");

        let params = self.query_params(url, strategy, categories);
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_transport(e, strategy, timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify_transport(e, strategy, timeout))?;

        let result = classify_response(status, &body);
        match &result {
            Ok(_) => debug!(
                url,
                %strategy,
                duration_ms = start.elapsed().as_millis(),
                "PageSpeed analysis completed"
            ),
            Err(e) => warn!(url, %strategy, status = %status, error = %e, "PageSpeed API error"),
        }
        result
    }

    /// Query string for one call. `category` repeats once per requested category.
    fn query_params(
        &self,
        url: &str,
        strategy: Strategy,
        categories: &[Category],
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("url", url.to_string()),
            ("strategy", strategy.as_str().to_string()),
        ];
        params.extend(categories.iter().map(|c| ("category", c.as_str().to_string())));
        params.push(("locale", self.locale.clone()));
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

/// Map an HTTP status and body to the call outcome.
fn classify_response(status: StatusCode, body: &str) -> Result<RawAnalysis> {
    match status {
        StatusCode::OK => serde_json::from_str(body)
            .map(RawAnalysis::new)
            .map_err(|e| PageSpeedError::MalformedResponse(e.to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(PageSpeedError::RateLimited),
        s if s.is_server_error() => Err(PageSpeedError::UpstreamUnavailable { status: s.as_u16() }),
        s => {
            let message = serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", s.as_u16()));
            Err(PageSpeedError::Upstream {
                status: s.as_u16(),
                message,
            })
        }
    }
}

fn classify_transport(error: reqwest::Error, strategy: Strategy, timeout: Duration) -> PageSpeedError {
    if error.is_timeout() {
        PageSpeedError::Timeout {
            strategy,
            seconds: timeout.as_secs(),
        }
    } else if error.is_connect() {
        PageSpeedError::NetworkUnreachable(error.to_string())
    } else {
        PageSpeedError::Transport(error.to_string())
    }
}
