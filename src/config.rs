//! # Configuration
//!
//! Connection settings for the Refactoring Bridge, resolved from an explicit
//! value first, then the environment, then the built-in default.

use std::time::Duration;

/// Environment variable overriding the bridge base URL
pub const BRIDGE_URL_ENV: &str = "PYCHARM_BRIDGE_URL";
/// Environment variable carrying the bridge bearer token
pub const BRIDGE_TOKEN_ENV: &str = "PYCHARM_BRIDGE_TOKEN";

pub const DEFAULT_BASE_URL: &str = "http://localhost:9876";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Base URL of the Refactoring Bridge HTTP server (no trailing slash)
    pub base_url: String,
    /// Optional bearer token sent as `Authorization: Bearer <token>`
    pub auth_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl BridgeConfig {
    /// Resolve the configuration. Explicit arguments win over the
    /// environment, which wins over the built-in defaults.
    pub fn resolve(
        base_url: Option<String>,
        auth_token: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        Self::resolve_with(base_url, auth_token, timeout, |key| std::env::var(key).ok())
    }

    /// Same as [`BridgeConfig::resolve`] with an injectable environment lookup.
    pub fn resolve_with<F>(
        base_url: Option<String>,
        auth_token: Option<String>,
        timeout: Option<Duration>,
        env: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_empty(base_url)
            .or_else(|| non_empty(env(BRIDGE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let auth_token = non_empty(auth_token).or_else(|| non_empty(env(BRIDGE_TOKEN_ENV)));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
