//! clipform — clip submission handler.
//!
//! Turns a clip form submission into one `POST /api/clip` request and renders
//! the JSON answer (or the failure) into an output region. The output region
//! and the transport are both injected, so the whole cycle runs without a
//! browser.
//!
//! # Quick Start
//!
//! ```no_run
//! use clipform::prelude::*;
//!
//! # async fn example() -> clipform::error::Result<()> {
//! let api = HttpClipApi::new(ClientConfig::from_env()?);
//! let handler = SubmissionHandler::new(api, LatestSink::new());
//!
//! let form = FormData::new()
//!     .with("youtube-url", "https://youtu.be/x")
//!     .with("subtitle-color", "red");
//! let mut event = SubmitEvent::new(form);
//! handler.handle(&mut event).await;
//!
//! println!("{}", handler.sink().contents());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod handler;
pub mod prelude;
pub mod render;
pub mod request;
pub mod response;
pub mod sink;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(feature = "cli")]
pub mod cli;
