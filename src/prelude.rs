//! Convenience re-exports for common use.

pub use crate::client::{ClipApi, HttpClipApi};
pub use crate::config::ClientConfig;
pub use crate::error::{ClipError, FailureKind, Result};
pub use crate::form::{FormData, SubmitEvent};
pub use crate::handler::{PendingSubmission, SubmissionHandler, SubmissionOutcome};
pub use crate::render::Rendering;
pub use crate::request::{ClipRequest, ScheduleUnit, UploadSchedule};
pub use crate::response::{ClipPath, ClipResponse, Transcription};
pub use crate::sink::{LatestSink, MemorySink, OutputSink};
