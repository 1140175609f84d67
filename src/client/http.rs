//! reqwest-backed clip API client.

use std::sync::OnceLock;

use async_trait::async_trait;

use super::ClipApi;
use crate::config::ClientConfig;
use crate::error::{ClipError, Result};
use crate::request::ClipRequest;
use crate::response::{ApiFailure, ClipResponse};

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(reqwest::Client::new)
}

/// Posts clip requests to `{base_url}/api/clip`.
#[derive(Debug, Clone)]
pub struct HttpClipApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClipApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: shared_client().clone(),
            config,
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_once(&self, request: &ClipRequest) -> Result<ClipResponse> {
        let url = self.config.endpoint_url();
        tracing::debug!(%url, "posting clip request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        parse_clip_response(status, &body)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, request: &ClipRequest) -> Result<ClipResponse> {
        match self.config.timeout() {
            Some(budget) => within(budget, self.post_once(request)).await,
            None => self.post_once(request).await,
        }
    }

    // No tokio timer on wasm32; the configured timeout is ignored.
    #[cfg(target_arch = "wasm32")]
    async fn send(&self, request: &ClipRequest) -> Result<ClipResponse> {
        self.post_once(request).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ClipApi for HttpClipApi {
    async fn submit(&self, request: &ClipRequest) -> Result<ClipResponse> {
        self.send(request).await
    }
}

/// Run `future`, failing with [`ClipError::Timeout`] once `budget` elapses.
#[cfg(not(target_arch = "wasm32"))]
async fn within<T>(
    budget: std::time::Duration,
    future: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(budget, future)
        .await
        .unwrap_or_else(|_| Err(ClipError::Timeout(budget.as_millis() as u64)))
}

/// Decode a clip API answer.
///
/// The body is parsed as JSON before the status is looked at, so a failure
/// response without a JSON body is reported as a serialization error.
pub fn parse_clip_response(status: u16, body: &[u8]) -> Result<ClipResponse> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_slice(body)?);
    }

    let failure: ApiFailure = serde_json::from_slice(body)?;
    let message = failure.into_message(status);
    tracing::debug!(status, %message, "clip API rejected request");
    Err(ClipError::api(status, message))
}
