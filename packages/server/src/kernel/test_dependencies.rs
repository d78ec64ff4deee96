// Mock implementations for testing
//
// Provides a scripted analysis client that can be injected into AuditService
// in place of the real PageSpeed client.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pagespeed_client::{PageSpeedError, RawAnalysis, Result, Strategy};
use serde_json::Value;

use super::BaseAnalysisClient;

// =============================================================================
// Mock Analysis Client
// =============================================================================

/// Scripted outcome of a fetch
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Body(Value),
    RateLimited,
    Unavailable,
    Timeout,
    Unreachable,
}

impl MockOutcome {
    fn resolve(&self, strategy: Strategy) -> Result<RawAnalysis> {
        match self {
            Self::Body(body) => Ok(RawAnalysis::new(body.clone())),
            Self::RateLimited => Err(PageSpeedError::RateLimited),
            Self::Unavailable => Err(PageSpeedError::UpstreamUnavailable { status: 503 }),
            Self::Timeout => Err(PageSpeedError::Timeout {
                strategy,
                seconds: 45,
            }),
            Self::Unreachable => Err(PageSpeedError::NetworkUnreachable(
                "mock: connection refused".to_string(),
            )),
        }
    }
}

pub struct MockAnalysisClient {
    outcomes: Mutex<HashMap<Strategy, MockOutcome>>,
    delays: Mutex<HashMap<Strategy, Duration>>,
    failing_urls: Mutex<HashSet<String>>,
    probe_outcome: Mutex<MockOutcome>,
    calls: Arc<Mutex<Vec<(String, Strategy)>>>,
    api_key: bool,
}

impl MockAnalysisClient {
    /// Both strategies fail with 503 until scripted otherwise
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            failing_urls: Mutex::new(HashSet::new()),
            probe_outcome: Mutex::new(MockOutcome::Unavailable),
            calls: Arc::new(Mutex::new(Vec::new())),
            api_key: false,
        }
    }

    pub fn with_mobile(self, body: Value) -> Self {
        self.with_outcome(Strategy::Mobile, MockOutcome::Body(body))
    }

    pub fn with_desktop(self, body: Value) -> Self {
        self.with_outcome(Strategy::Desktop, MockOutcome::Body(body))
    }

    pub fn with_outcome(self, strategy: Strategy, outcome: MockOutcome) -> Self {
        self.outcomes.lock().unwrap().insert(strategy, outcome);
        self
    }

    /// Hold every fetch for this strategy for `delay` before resolving
    pub fn with_delay(self, strategy: Strategy, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(strategy, delay);
        self
    }

    /// Every fetch for this exact URL fails as unreachable
    pub fn failing_url(self, url: &str) -> Self {
        self.failing_urls.lock().unwrap().insert(url.to_string());
        self
    }

    pub fn with_probe(self, outcome: MockOutcome) -> Self {
        *self.probe_outcome.lock().unwrap() = outcome;
        self
    }

    pub fn with_api_key(mut self) -> Self {
        self.api_key = true;
        self
    }

    /// Get all (url, strategy) pairs that were fetched
    pub fn calls(&self) -> Vec<(String, Strategy)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAnalysisClient for MockAnalysisClient {
    async fn fetch_analysis(&self, url: &str, strategy: Strategy) -> Result<RawAnalysis> {
        // Record the call
        self.calls.lock().unwrap().push((url.to_string(), strategy));

        let delay = self.delays.lock().unwrap().get(&strategy).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_urls.lock().unwrap().contains(url) {
            return MockOutcome::Unreachable.resolve(strategy);
        }

        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .get(&strategy)
            .cloned()
            .unwrap_or(MockOutcome::Unavailable);
        outcome.resolve(strategy)
    }

    async fn fetch_performance_probe(&self, url: &str, _timeout: Duration) -> Result<RawAnalysis> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), Strategy::Mobile));
        let outcome = self.probe_outcome.lock().unwrap().clone();
        outcome.resolve(Strategy::Mobile)
    }

    fn has_api_key(&self) -> bool {
        self.api_key
    }
}
