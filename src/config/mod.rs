//! Client configuration (layered: code > env > defaults).

use std::time::Duration;

use crate::error::{ClipError, Result};

/// Where the clip API is served when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Path of the clip generation endpoint.
pub const CLIP_ENDPOINT: &str = "/api/clip";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "CLIP_API_BASE_URL";

/// Environment variable setting a request timeout in seconds (`0` disables it).
pub const TIMEOUT_ENV: &str = "CLIP_API_TIMEOUT_SECS";

/// Configuration for [`HttpClipApi`](crate::client::HttpClipApi).
///
/// No timeout is applied unless one is configured; a clip can take minutes
/// to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Load from environment variables (`CLIP_API_BASE_URL`, `CLIP_API_TIMEOUT_SECS`).
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClipError::Configuration(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL of the clip endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}{CLIP_ENDPOINT}", self.base_url.trim_end_matches('/'))
    }
}
