//! Clip API transport trait and implementations.

pub mod http;

pub use http::HttpClipApi;

use async_trait::async_trait;

use crate::error::Result;
use crate::request::ClipRequest;
use crate::response::ClipResponse;

/// Something that can turn a [`ClipRequest`] into a generated clip.
///
/// Implementations send exactly one request per call and never retry.
/// A non-2xx answer surfaces as [`ClipError::Api`](crate::error::ClipError::Api).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ClipApi {
    async fn submit(&self, request: &ClipRequest) -> Result<ClipResponse>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T> ClipApi for std::sync::Arc<T>
where
    T: ClipApi + Send + Sync + ?Sized,
{
    async fn submit(&self, request: &ClipRequest) -> Result<ClipResponse> {
        (**self).submit(request).await
    }
}
