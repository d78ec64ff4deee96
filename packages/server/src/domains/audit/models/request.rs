use url::Url;

use crate::domains::audit::error::{AuditError, Result};

/// A validated audit target.
///
/// The URL always carries an explicit `http://` or `https://` scheme;
/// bare hosts get `https://`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    url: String,
}

impl AuditRequest {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        let url = if lower.starts_with("http://") || lower.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        match Url::parse(&url) {
            Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(Self { url }),
            _ => Err(AuditError::InvalidInput {
                url: raw.to_string(),
            }),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}
