//! Core data types for the submission pipeline.
//!
//! These types represent the page captures, index requests, and server
//! responses that flow between the capture sources, the admission gate,
//! and the indexing client.

use serde::{Deserialize, Serialize};

/// Client version tag attached to every submission, read by the server
/// to track which forwarder versions are active.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content captured for one page visit, before the admission decision.
///
/// Created by a capture source, consumed exactly once by the gate, and
/// discarded after the decision.
#[derive(Debug, Clone)]
pub struct SubmissionCandidate {
    pub url: String,
    pub content: PageContent,
}

/// Payload shape varies by capture source: a serialized page body or a
/// local file path the server extracts text from itself.
#[derive(Debug, Clone)]
pub enum PageContent {
    Html { text: String },
    File { filename: String },
}

/// JSON body for `POST {base}/index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub webext_version: String,
}

impl IndexRequest {
    /// Flatten a candidate into the wire shape, tagging it with the
    /// client version.
    pub fn from_candidate(candidate: SubmissionCandidate) -> Self {
        let (text, filename) = match candidate.content {
            PageContent::Html { text } => (Some(text), None),
            PageContent::File { filename } => (None, Some(filename)),
        };
        Self {
            url: candidate.url,
            text,
            filename,
            webext_version: CLIENT_VERSION.to_string(),
        }
    }
}

/// JSON body returned by `POST {base}/index`.
///
/// The server sends more fields than the client cares about (backend
/// responses, sentence counts); unknown ones are retained for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// JSON body returned by `GET {base}/answer/{uuid}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    /// HTML extract supporting the answer.
    pub extract: String,
    pub url: String,
}
