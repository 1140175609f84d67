//! Error types for clipform.

use thiserror::Error;

/// Primary error type for all clipform operations.
#[derive(Error, Debug)]
pub enum ClipError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The clip API answered with a non-2xx status and an `{"error": ...}` body.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    /// Transport failure reported by a non-reqwest [`ClipApi`](crate::client::ClipApi).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// How a failed submission came about.
///
/// Every kind is rendered the same way; the distinction only matters for
/// logging and for callers that inspect the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend rejected the request with a structured error.
    Application,
    /// The request never produced a usable response.
    Transport,
    /// The form was rejected before anything was sent.
    Validation,
}

impl ClipError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Api { .. } => FailureKind::Application,
            Self::Validation(_) | Self::Configuration(_) => FailureKind::Validation,
            Self::Network(_) | Self::Serialization(_) | Self::Timeout(_) | Self::Transport(_) => {
                FailureKind::Transport
            }
        }
    }

    /// Text shown to the user after the `Error: ` prefix.
    ///
    /// Backend and transport messages are passed through verbatim. For
    /// network errors this is the innermost cause (`Connection refused`,
    /// `Failed to fetch`), not reqwest's "error sending request" wrapper.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Network(e) => root_cause(e).to_string(),
            Self::Serialization(e) => e.to_string(),
            Self::Timeout(ms) => format!("Request timed out after {ms}ms"),
            Self::Transport(message)
            | Self::Validation(message)
            | Self::Configuration(message) => message.clone(),
        }
    }
}

/// Innermost error in a `source()` chain.
pub fn root_cause<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> &'a (dyn std::error::Error + 'static) {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ClipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_and_user_message() {
        let err = ClipError::api(400, "invalid url");
        assert_eq!(err.to_string(), "API error (status 400): invalid url");
        assert_eq!(err.user_message(), "invalid url");
        assert_eq!(err.kind(), FailureKind::Application);
    }

    #[test]
    fn transport_errors_pass_message_through() {
        let err = ClipError::Transport("Failed to fetch".to_string());
        assert_eq!(err.user_message(), "Failed to fetch");
        assert_eq!(err.kind(), FailureKind::Transport);
    }

    #[test]
    fn malformed_json_is_a_transport_failure() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{not-json").unwrap_err();
        let expected = serde_error.to_string();
        let err = ClipError::from(serde_error);
        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.user_message(), expected);
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn root_cause_walks_to_the_innermost_source() {
        let err = Outer(Middle(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        assert_eq!(root_cause(&err).to_string(), "Connection refused");

        let leaf = std::io::Error::new(std::io::ErrorKind::Other, "Failed to fetch");
        assert_eq!(root_cause(&leaf).to_string(), "Failed to fetch");
    }

    #[test]
    fn validation_errors_are_classified() {
        let err = ClipError::validation("URL is required");
        assert_eq!(err.kind(), FailureKind::Validation);
        assert_eq!(err.user_message(), "URL is required");
    }

    #[test]
    fn timeout_message_names_the_budget() {
        assert_eq!(
            ClipError::Timeout(250).user_message(),
            "Request timed out after 250ms"
        );
    }
}
