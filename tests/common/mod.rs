//! Shared test helpers and mock clip API.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use clipform::client::ClipApi;
use clipform::error::{ClipError, Result};
use clipform::form::{FormData, EFFECTS_FIELD, EMOJIS_FIELD, SUBTITLE_COLOR_FIELD, URL_FIELD};
use clipform::request::ClipRequest;
use clipform::response::{ClipPath, ClipResponse, Transcription};

/// A mock clip API that returns queued results and records requests.
#[derive(Default)]
pub struct MockClipApi {
    results: Mutex<VecDeque<Result<ClipResponse>>>,
    requests: Mutex<Vec<ClipRequest>>,
}

impl MockClipApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_success(&self, message: &str, path: &str, transcription: &str) {
        self.results.lock().unwrap().push_back(Ok(ClipResponse {
            message: message.to_string(),
            path: ClipPath::Single(path.to_string()),
            transcription: Transcription::Text(transcription.to_string()),
        }));
    }

    pub fn queue_error(&self, error: ClipError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ClipRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipApi for MockClipApi {
    async fn submit(&self, request: &ClipRequest) -> Result<ClipResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClipError::Transport("no queued result".to_string())))
    }
}

/// The form from the success scenario.
pub fn sample_form() -> FormData {
    FormData::new()
        .with(URL_FIELD, "https://youtu.be/x")
        .with(SUBTITLE_COLOR_FIELD, "red")
        .with(EMOJIS_FIELD, "yes")
        .with(EFFECTS_FIELD, "none")
}
