//! Submission orchestration.
//!
//! Wires the tracker, gate, indexing client, and notification sink into
//! the flow described by the navigation pipeline: record status → capture
//! content → admission check → best-effort POST. Transport and parse
//! failures never escape this module; they are logged and dropped, and
//! rejections are silent. Nothing in here can take down the host process.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::capture::{FileSource, PageFetchSource, SubmissionSource};
use crate::client::IndexClient;
use crate::config::Config;
use crate::gate::{self, Admission, RejectionReason};
use crate::models::{IndexResponse, SubmissionCandidate};
use crate::notify::{NotificationSink, StdoutNotifier};
use crate::tracker::NavigationTracker;

/// Notification title used for server messages.
const NOTIFY_TITLE: &str = "page-courier";

/// Outcome of handling one candidate.
///
/// There is no error variant on purpose: failures are terminal for the
/// submission, not for the caller.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The server accepted the POST and returned a parseable body.
    Submitted(IndexResponse),
    /// The gate declined; no request was made.
    Rejected(RejectionReason),
    /// Transport or parse failure, already logged.
    Dropped,
}

/// The navigation-outcome submission pipeline.
pub struct SubmissionPipeline {
    tracker: Arc<NavigationTracker>,
    client: IndexClient,
    notifier: Arc<dyn NotificationSink>,
}

impl SubmissionPipeline {
    pub fn new(
        tracker: Arc<NavigationTracker>,
        client: IndexClient,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            tracker,
            client,
            notifier,
        }
    }

    /// Build a pipeline from config with the given sink.
    pub fn from_config(
        config: &Config,
        tracker: Arc<NavigationTracker>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Result<Self> {
        let client = IndexClient::new(
            &config.server.base_url,
            Duration::from_secs(config.server.timeout_secs),
        )?;
        Ok(Self::new(tracker, client, notifier))
    }

    pub fn tracker(&self) -> &Arc<NavigationTracker> {
        &self.tracker
    }

    /// Run one candidate through gate and submission.
    ///
    /// The admission check happens before the first await so the decision
    /// uses the status table as it stands right now; once admitted, later
    /// renavigations do not cancel the in-flight POST.
    pub async fn handle(&self, candidate: SubmissionCandidate) -> SubmissionOutcome {
        let request = match gate::try_admit(&self.tracker, candidate) {
            Admission::Admitted(request) => request,
            Admission::Rejected(reason) => {
                tracing::debug!(%reason, "candidate not admitted");
                return SubmissionOutcome::Rejected(reason);
            }
        };

        match self.client.submit(&request).await {
            Ok(response) => {
                tracing::info!(url = %request.url, response = ?response, "index response");
                if let Some(err) = response.error.as_deref() {
                    tracing::warn!(url = %request.url, error = err, "server reported an indexing error");
                }
                if let Some(message) = response.message.as_deref() {
                    if !message.is_empty() {
                        self.notifier.notify(NOTIFY_TITLE, message, 1);
                    }
                }
                SubmissionOutcome::Submitted(response)
            }
            Err(e) => {
                // Best-effort by design: log and move on, no retry.
                tracing::warn!(url = %request.url, error = %e, "submission dropped");
                SubmissionOutcome::Dropped
            }
        }
    }
}

/// CLI entry point for `courier submit <url>`.
pub async fn run_submit(config: &Config, url: &str) -> Result<()> {
    let tracker = Arc::new(NavigationTracker::new());
    let pipeline = SubmissionPipeline::from_config(config, tracker.clone(), Arc::new(StdoutNotifier))?;

    let source = PageFetchSource::new(
        tracker,
        url,
        Duration::from_secs(config.server.timeout_secs),
    )?;
    let candidate = source.capture_current_page().await?;

    print_outcome("submit", url, pipeline.handle(candidate).await);
    Ok(())
}

/// CLI entry point for `courier submit-file <path> --url <url>`.
pub async fn run_submit_file(config: &Config, path: &Path, url: &str) -> Result<()> {
    let tracker = Arc::new(NavigationTracker::new());
    let pipeline = SubmissionPipeline::from_config(config, tracker.clone(), Arc::new(StdoutNotifier))?;

    let source = FileSource::new(tracker, url, path);
    let candidate = source.capture_current_page().await?;

    print_outcome("submit-file", url, pipeline.handle(candidate).await);
    Ok(())
}

fn print_outcome(command: &str, url: &str, outcome: SubmissionOutcome) {
    println!("{} {}", command, url);
    match outcome {
        SubmissionOutcome::Submitted(response) => {
            if let Some(message) = response.message.as_deref() {
                println!("  server: {}", message);
            }
            if let Some(error) = response.error.as_deref() {
                println!("  server error: {}", error);
            }
            println!("ok");
        }
        SubmissionOutcome::Rejected(reason) => {
            println!("  not submitted: {}", reason);
            println!("ok");
        }
        SubmissionOutcome::Dropped => {
            println!("  dropped: server unreachable or sent a malformed reply");
            println!("ok");
        }
    }
}
