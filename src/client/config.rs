//! Client configuration options.

use std::time::Duration;

use crate::endpoints;

/// Configuration for the Robinhood client.
///
/// # Example
///
/// ```
/// use robinhood_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL; always ends with a slash.
    pub base_url: String,
    /// Request timeout applied when the client builds its own transport.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: endpoints::BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("robinhood-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base URL (test servers, proxies).
    /// A trailing slash is added if missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set the request timeout.
    ///
    /// Only applies when the client builds its own transport; a
    /// caller-supplied `reqwest::Client` keeps its own timeout settings.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
