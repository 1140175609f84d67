//! Incoming response payloads from `POST /api/clip`.
//!
//! The backend is loose about shapes: `path` may be one path or a list of
//! generated clips, and `transcription` may be plain text or the full
//! transcription object with timestamped segments.

use std::fmt;

use serde::Deserialize;

/// Body of a 2xx response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipResponse {
    pub message: String,
    pub path: ClipPath,
    pub transcription: Transcription,
}

/// Where the generated clip(s) were written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClipPath {
    Single(String),
    Many(Vec<String>),
}

impl ClipPath {
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::Single(path) => vec![path.as_str()],
            Self::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for ClipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths().join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Transcription {
    Text(String),
    Detailed {
        text: String,
        #[serde(default)]
        segments: Vec<TranscriptSegment>,
    },
}

impl Transcription {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Detailed { text, .. } => text,
        }
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        match self {
            Self::Text(_) => &[],
            Self::Detailed { segments, .. } => segments,
        }
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A timestamped piece of the transcription, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiFailure {
    /// The backend's message, or a generic one naming the status.
    pub fn into_message(self, status: u16) -> String {
        self.error
            .unwrap_or_else(|| format!("Request failed with status {status}"))
    }
}
