//! Persistent-channel delivery: NDJSON events on stdin.
//!
//! The long-lived counterpart of `courier submit` — the process stays
//! attached and consumes a stream of browser-shaped events, one JSON
//! object per line:
//!
//! ```json
//! {"event":"completed","url":"http://example.com/","status_code":200,"frame":"main_frame","tab_id":3}
//! {"event":"page","url":"http://example.com/","text":"<html>...</html>"}
//! ```
//!
//! `completed` events feed the navigation tracker; `page` events become
//! submission candidates. Events are handled strictly in order, one at a
//! time, so a candidate's admission check always sees every completion
//! that preceded it on the stream. Malformed lines are logged and
//! skipped; nothing on the stream can abort the process.

use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::models::{PageContent, SubmissionCandidate};
use crate::notify::LogNotifier;
use crate::pipeline::SubmissionPipeline;
use crate::tracker::{FrameKind, NavigationTracker};

/// One event on the delivery channel.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WireEvent {
    /// A navigation finished loading (webRequest `onCompleted` shape).
    Completed {
        url: String,
        status_code: u16,
        frame: FrameKind,
        tab_id: i64,
    },
    /// A page script delivered the current document.
    Page { url: String, text: String },
}

/// Dispatch a single event against the pipeline.
pub async fn dispatch_event(pipeline: &SubmissionPipeline, event: WireEvent) {
    match event {
        WireEvent::Completed {
            url,
            status_code,
            frame,
            tab_id,
        } => {
            pipeline
                .tracker()
                .record_completion(&url, status_code, frame, tab_id);
        }
        WireEvent::Page { url, text } => {
            let candidate = SubmissionCandidate {
                url,
                content: PageContent::Html { text },
            };
            pipeline.handle(candidate).await;
        }
    }
}

/// CLI entry point for `courier pipe`: consume events from stdin until EOF.
pub async fn run_pipe(config: &Config) -> Result<()> {
    let tracker = Arc::new(NavigationTracker::new());
    let pipeline = SubmissionPipeline::from_config(config, tracker, Arc::new(LogNotifier))?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<WireEvent>(&line) {
            Ok(event) => dispatch_event(&pipeline, event).await,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed event line");
            }
        }
    }

    Ok(())
}
