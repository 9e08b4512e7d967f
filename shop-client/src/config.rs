//! Client configuration

use std::time::Duration;

/// Configuration for connecting to the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication, if already logged in
    pub token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// Interval between session re-validation polls
    pub session_refresh_interval: Duration,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(30),
            session_refresh_interval: Duration::from_secs(300),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the session refresh interval
    pub fn with_session_refresh_interval(mut self, interval: Duration) -> Self {
        self.session_refresh_interval = interval;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
