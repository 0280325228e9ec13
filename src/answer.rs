//! Answer retrieval and rendering.
//!
//! A question-shaped search (`…?`) makes the server spawn an answer task
//! and hand back a UUID; `GET {base}/answer/{uuid}` blocks server-side for
//! up to 30 seconds until the answer is ready, then returns the answer
//! text, an HTML extract, and the source URL.

use std::time::Duration;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::config::Config;
use crate::models::AnswerResponse;

/// Transport retries before giving up. The server already long-polls, so
/// this only papers over a briefly unreachable server, not a slow answer.
const MAX_ATTEMPTS: u32 = 3;

/// Fetch the answer for `id`, waiting for the server to finish computing it.
pub async fn fetch_answer(config: &Config, id: &str) -> Result<AnswerResponse> {
    Uuid::parse_str(id).with_context(|| format!("'{}' is not a valid answer id", id))?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.server.answer_timeout_secs))
        .build()?;
    let url = format!("{}/answer/{}", config.server.base_url, id);

    let mut last_err = None;
    for attempt in 0..MAX_ATTEMPTS {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        match http.get(&url).send().await {
            Ok(response) => {
                return response
                    .json::<AnswerResponse>()
                    .await
                    .context("answer endpoint returned a malformed body");
            }
            Err(e) => {
                tracing::debug!(attempt, error = %e, "answer fetch failed");
                last_err = Some(e);
            }
        }
    }

    let err = last_err
        .map(anyhow::Error::from)
        .unwrap_or_else(|| anyhow::anyhow!("answer fetch failed"));
    Err(err.context(format!("Could not reach {}", url)))
}

/// CLI entry point — fetches the answer and prints it.
pub async fn run_answer(config: &Config, id: &str) -> Result<()> {
    let answer = fetch_answer(config, id).await?;

    println!("--- Answer ---");
    println!("{}", answer.answer);
    println!();
    println!("--- Extract ---");
    println!("{}", answer.extract);
    println!();
    println!("url: {}", answer.url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_invalid_uuid_is_rejected_before_any_request() {
        let config = Config::default();
        let err = fetch_answer(&config, "not-a-uuid").await.unwrap_err();
        assert!(err.to_string().contains("not a valid answer id"));
    }
}
