//! Client configuration

use std::time::Duration;

/// Retry behavior for API calls.
///
/// Attempts beyond the timeout list reuse its last entry. Timeouts abort
/// without retry; every other failure is retried until `attempts` is
/// exhausted, waiting `backoff` between attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1)
    pub attempts: u32,
    /// Per-attempt timeout, indexed by attempt number
    pub timeout_by_attempt: Vec<Duration>,
    /// Wait between attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Timeout for the given zero-based attempt.
    pub fn timeout_for(&self, attempt: u32) -> Duration {
        self.timeout_by_attempt
            .get(attempt as usize)
            .or_else(|| self.timeout_by_attempt.last())
            .copied()
            .unwrap_or(Duration::from_secs(30))
    }

    /// A policy that never retries and keeps the first-attempt timeout.
    pub fn no_retry(mut self) -> Self {
        self.attempts = 1;
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 2,
            timeout_by_attempt: vec![Duration::from_secs(30), Duration::from_secs(15)],
            backoff: Duration::from_secs(2),
        }
    }
}

/// Client configuration for connecting to the admin backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.example.com")
    pub base_url: String,

    /// Retry behavior for every API call
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a new client configuration with the default retry policy
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
