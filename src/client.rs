//! Indexing server client.
//!
//! Serializes admitted payloads to JSON and posts them to `{base}/index`.
//! The server answers JSON on both the success and the error path (error
//! bodies carry an `error` field), so the response body is parsed
//! regardless of HTTP status and the taxonomy below only distinguishes
//! transport failures from unparseable bodies.

use std::time::Duration;

use thiserror::Error;

use crate::models::{IndexRequest, IndexResponse};

/// Failure submitting to the index endpoint.
///
/// Both variants are caught at the pipeline boundary, logged, and dropped —
/// submission is best-effort with no retry and no queue.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Connection refused, DNS failure, or timeout.
    #[error("transport failure reaching the index endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a body that is not valid JSON.
    #[error("index endpoint returned a non-JSON body: {0}")]
    Parse(#[source] reqwest::Error),
}

/// HTTP client for the indexing server.
pub struct IndexClient {
    http: reqwest::Client,
    base_url: String,
}

impl IndexClient {
    /// Build a client for `base_url` with a bounded request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn index_url(&self) -> String {
        format!("{}/index", self.base_url)
    }

    /// POST an admitted payload to `{base}/index` and parse the JSON reply.
    pub async fn submit(&self, request: &IndexRequest) -> Result<IndexResponse, SubmitError> {
        let response = self
            .http
            .post(self.index_url())
            .json(request)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        response.json::<IndexResponse>().await.map_err(|e| {
            if e.is_decode() {
                SubmitError::Parse(e)
            } else {
                SubmitError::Transport(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_url_joins_endpoint() {
        let client = IndexClient::new("http://localhost:8080", Duration::from_secs(10)).unwrap();
        assert_eq!(client.index_url(), "http://localhost:8080/index");
    }

    #[test]
    fn test_index_url_tolerates_trailing_slash() {
        let client = IndexClient::new("http://localhost:8080/", Duration::from_secs(10)).unwrap();
        assert_eq!(client.index_url(), "http://localhost:8080/index");
    }
}
