use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub pagespeed_api_key: Option<String>,
    pub pagespeed_api_base: String,
    pub pagespeed_timeout: Duration,
    pub request_timeout: Duration,
    pub batch_concurrency: usize,
    pub batch_max_urls: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: parse_or("PORT", env::var("PORT").ok(), 3001)?,
            pagespeed_api_key: env::var(pagespeed_client::API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            pagespeed_api_base: env::var("PAGESPEED_API_BASE")
                .unwrap_or_else(|_| pagespeed_client::DEFAULT_BASE_URL.to_string()),
            pagespeed_timeout: Duration::from_secs(parse_or(
                "PAGESPEED_TIMEOUT_SECS",
                env::var("PAGESPEED_TIMEOUT_SECS").ok(),
                pagespeed_client::DEFAULT_TIMEOUT.as_secs(),
            )?),
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                env::var("REQUEST_TIMEOUT_SECS").ok(),
                180,
            )?),
            batch_concurrency: parse_or(
                "AUDIT_BATCH_CONCURRENCY",
                env::var("AUDIT_BATCH_CONCURRENCY").ok(),
                2,
            )?
            .max(1),
            batch_max_urls: parse_or(
                "AUDIT_BATCH_MAX_URLS",
                env::var("AUDIT_BATCH_MAX_URLS").ok(),
                10,
            )?,
        })
    }
}

/// Parse an optional raw value, falling back to `default` when unset
fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        None => Ok(default),
    }
}
