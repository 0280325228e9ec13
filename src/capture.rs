//! Content capture sources.
//!
//! Page content can reach the pipeline through different mechanisms — a
//! one-shot fetch, a finished download, a long-lived event stream. They
//! are unified behind [`SubmissionSource`]: one method that yields a
//! [`SubmissionCandidate`] for the current page.
//!
//! Sources also feed the navigation tracker, since in a CLI process the
//! "navigation" is whatever transfer the source performed.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::models::{PageContent, SubmissionCandidate};
use crate::tracker::{FrameKind, NavigationTracker};

/// Synthetic tab id for captures driven by this process. Anything other
/// than the no-tab sentinel works; the value itself is never compared.
pub const LOCAL_TAB_ID: i64 = 0;

/// A mechanism that can produce the current page as a submission candidate.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    async fn capture_current_page(&self) -> Result<SubmissionCandidate>;
}

/// Captures a page by fetching it over HTTP.
///
/// The fetch doubles as the top-level navigation: its response status is
/// recorded into the tracker before the candidate is produced, so the
/// gate later sees exactly what this load returned.
pub struct PageFetchSource {
    http: reqwest::Client,
    tracker: Arc<NavigationTracker>,
    url: String,
}

impl PageFetchSource {
    pub fn new(tracker: Arc<NavigationTracker>, url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            tracker,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl SubmissionSource for PageFetchSource {
    async fn capture_current_page(&self) -> Result<SubmissionCandidate> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", self.url))?;

        let status = response.status().as_u16();
        self.tracker
            .record_completion(&self.url, status, FrameKind::MainFrame, LOCAL_TAB_ID);

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", self.url))?;

        Ok(SubmissionCandidate {
            url: self.url.clone(),
            content: PageContent::Html { text },
        })
    }
}

/// Captures a finished download: the payload names a local file and the
/// server extracts the text itself.
///
/// A completed download stands in for a successful navigation, so a 200
/// is recorded for the URL once the file is confirmed readable.
pub struct FileSource {
    tracker: Arc<NavigationTracker>,
    url: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(tracker: Arc<NavigationTracker>, url: &str, path: &Path) -> Self {
        Self {
            tracker,
            url: url.to_string(),
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl SubmissionSource for FileSource {
    async fn capture_current_page(&self) -> Result<SubmissionCandidate> {
        let metadata = std::fs::metadata(&self.path)
            .with_context(|| format!("Cannot read downloaded file: {}", self.path.display()))?;
        if !metadata.is_file() {
            anyhow::bail!("Not a file: {}", self.path.display());
        }

        self.tracker
            .record_completion(&self.url, 200, FrameKind::MainFrame, LOCAL_TAB_ID);

        Ok(SubmissionCandidate {
            url: self.url.clone(),
            content: PageContent::File {
                filename: self.path.display().to_string(),
            },
        })
    }
}
