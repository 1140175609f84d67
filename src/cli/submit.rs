//! `clipform submit` handler.

use std::io::Write;
use std::time::Duration;

use super::SubmitArgs;
use crate::client::HttpClipApi;
use crate::config::ClientConfig;
use crate::form::SubmitEvent;
use crate::handler::{SubmissionHandler, SubmissionOutcome};
use crate::render::IN_PROGRESS;
use crate::sink::OutputSink;

/// Progress on stderr, final rendering on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn replace(&self, html: &str) {
        if html == IN_PROGRESS {
            eprintln!("{html}");
        } else if let Err(error) = emit(&mut std::io::stdout().lock(), html) {
            tracing::warn!(%error, "failed to write rendering to stdout");
        }
    }
}

fn emit(out: &mut impl Write, html: &str) -> std::io::Result<()> {
    writeln!(out, "{html}")?;
    out.flush()
}

/// Handle `clipform submit`. Returns whether the clip was generated.
pub async fn handle_submit(args: SubmitArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(secs) = args.timeout_secs {
        config = match secs {
            0 => config.without_timeout(),
            secs => config.with_timeout(Duration::from_secs(secs)),
        };
    }

    let handler = SubmissionHandler::new(HttpClipApi::new(config), ConsoleSink);
    let mut event = SubmitEvent::new(args.to_form());

    let outcome = handler.handle(&mut event).await;
    Ok(matches!(
        outcome,
        SubmissionOutcome::Rendered(ref rendering) if !rendering.is_error()
    ))
}
