//! The submission handler: one form submit in, one rendering out.
//!
//! A submission runs in two halves. [`SubmissionHandler::begin`] is
//! synchronous: it blocks the native submit, snapshots and validates the
//! form, and shows [`IN_PROGRESS`]. [`SubmissionHandler::complete`] sends the
//! request (if the form was valid) and renders the outcome.
//!
//! Every `begin` takes a new generation number. When `complete` finishes for
//! a generation that is no longer the latest, its outcome is dropped so a
//! slow, older response cannot overwrite a newer submission.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::client::ClipApi;
use crate::error::{ClipError, Result};
use crate::form::SubmitEvent;
use crate::render::{Rendering, IN_PROGRESS};
use crate::request::ClipRequest;
use crate::sink::OutputSink;

/// A submission that has been started but not yet sent.
#[derive(Debug)]
pub struct PendingSubmission {
    generation: u64,
    request: Result<ClipRequest>,
}

impl PendingSubmission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The request that will be sent, or `None` if the form was rejected.
    pub fn request(&self) -> Option<&ClipRequest> {
        self.request.as_ref().ok()
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The rendering was written to the output sink.
    Rendered(Rendering),
    /// A newer submission started first; nothing was written.
    Superseded { generation: u64 },
}

impl SubmissionOutcome {
    pub fn rendering(&self) -> Option<&Rendering> {
        match self {
            Self::Rendered(rendering) => Some(rendering),
            Self::Superseded { .. } => None,
        }
    }
}

/// Mediates form submissions into clip API calls.
#[derive(Debug)]
pub struct SubmissionHandler<A, S> {
    api: A,
    sink: S,
    latest: Mutex<u64>,
}

impl<A, S> SubmissionHandler<A, S>
where
    A: ClipApi,
    S: OutputSink,
{
    pub fn new(api: A, sink: S) -> Self {
        Self {
            api,
            sink,
            latest: Mutex::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Generation number of the most recent submission (0 before any).
    pub fn latest_generation(&self) -> u64 {
        *self.lock_latest()
    }

    /// Start a submission.
    ///
    /// Always suppresses the event's default action and always replaces the
    /// output with [`IN_PROGRESS`] before returning.
    pub fn begin(&self, event: &mut SubmitEvent) -> PendingSubmission {
        event.prevent_default();

        let request = ClipRequest::from_form(event.form()).and_then(|request| {
            request.validate()?;
            Ok(request)
        });

        let generation = {
            let mut latest = self.lock_latest();
            *latest += 1;
            self.sink.replace(IN_PROGRESS);
            *latest
        };

        tracing::debug!(generation, valid = request.is_ok(), "clip submission started");
        PendingSubmission {
            generation,
            request,
        }
    }

    /// Send the request and render its outcome.
    ///
    /// Sends at most one request and never retries. A rejected form is
    /// rendered as an error without touching the network.
    pub async fn complete(&self, pending: PendingSubmission) -> SubmissionOutcome {
        let PendingSubmission {
            generation,
            request,
        } = pending;

        let result = match request {
            Ok(request) => self.api.submit(&request).await,
            Err(err) => Err(err),
        };

        let rendering = match result {
            Ok(response) => {
                tracing::debug!(generation, path = %response.path, "clip generated");
                Rendering::success(&response)
            }
            Err(err) => {
                tracing::warn!(
                    generation,
                    kind = ?err.kind(),
                    error = %err,
                    "clip submission failed"
                );
                Rendering::error(&err.user_message())
            }
        };

        let latest = self.lock_latest();
        if *latest != generation {
            tracing::debug!(
                generation,
                latest = *latest,
                "dropping outcome of superseded submission"
            );
            return SubmissionOutcome::Superseded { generation };
        }
        self.sink.replace(rendering.html());
        SubmissionOutcome::Rendered(rendering)
    }

    /// Fail a submission whose form could not be read at all.
    ///
    /// Takes a new generation like [`begin`](Self::begin), so an older
    /// in-flight response cannot overwrite the error, and renders it at once.
    pub fn reject(&self, error: ClipError) -> SubmissionOutcome {
        let rendering = Rendering::error(&error.user_message());

        let mut latest = self.lock_latest();
        *latest += 1;
        tracing::warn!(generation = *latest, error = %error, "clip submission rejected");
        self.sink.replace(rendering.html());
        SubmissionOutcome::Rendered(rendering)
    }

    /// [`begin`](Self::begin) followed by [`complete`](Self::complete).
    pub async fn handle(&self, event: &mut SubmitEvent) -> SubmissionOutcome {
        let pending = self.begin(event);
        self.complete(pending).await
    }

    fn lock_latest(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
