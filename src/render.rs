//! HTML written into the output region.
//!
//! Every rendering replaces the whole region, so repeated submissions never
//! accumulate markup. Interpolated values are HTML-escaped.

use crate::response::ClipResponse;

/// Shown as soon as a submission starts.
pub const IN_PROGRESS: &str = "Generating clip...";

/// Final content of the output region for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    Success(String),
    Error(String),
}

impl Rendering {
    pub fn success(response: &ClipResponse) -> Self {
        Self::Success(format!(
            "<p>{}</p>\n<p>Clip path: {}</p>\n<p>Transcription: {}</p>",
            escape_html(&response.message),
            escape_html(&response.path.to_string()),
            escape_html(response.transcription.text()),
        ))
    }

    pub fn error(message: &str) -> Self {
        Self::Error(format!("<p>Error: {}</p>", escape_html(message)))
    }

    pub fn html(&self) -> &str {
        match self {
            Self::Success(html) | Self::Error(html) => html,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
