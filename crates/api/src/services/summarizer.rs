//! Summarization service client.
//!
//! Forwards a free-text prompt to the external summarization service and
//! relays its JSON body back unmodified on success. Non-success responses
//! and timeouts are logged with their upstream detail and surfaced to the
//! caller as an opaque upstream failure; the upstream status/body is never
//! relayed verbatim.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the summarization service.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// HTTP request failed (connect error, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success response.
    #[error("service error: {status} - {message}")]
    Api {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream body, for server-side logs only.
        message: String,
    },

    /// Failed to parse the service's JSON body.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Request body sent to the summarization service.
#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    prompt: &'a str,
}

/// Client for the external summarization service.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    url: String,
}

impl SummaryClient {
    /// Create a new summarization client.
    ///
    /// Every request is bounded by `timeout`; an elapsed timeout surfaces as
    /// `SummaryError::Http`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SummaryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Forward a prompt and return the service's JSON body.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Http` on transport failure or timeout,
    /// `SummaryError::Api` on a non-success upstream response, and
    /// `SummaryError::Parse` if the success body is not JSON.
    pub async fn summarize(&self, prompt: &str) -> Result<Value, SummaryError> {
        let response = self
            .client
            .post(&self.url)
            .json(&SummaryRequest { prompt })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SummaryError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_timeout() {
        let client = SummaryClient::new(
            "http://localhost:5000/generate_summary",
            Duration::from_secs(5),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SummaryRequest { prompt: "two phones under 40000" })
            .unwrap();
        assert_eq!(body, serde_json::json!({"prompt": "two phones under 40000"}));
    }

    #[test]
    fn test_api_error_display_keeps_upstream_detail_for_logs() {
        let err = SummaryError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "service error: 503 - model overloaded");
    }
}
