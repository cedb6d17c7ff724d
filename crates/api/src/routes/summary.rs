//! Summarization proxy handler.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Summarization request body.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub prompt: Option<String>,
}

/// Forward a prompt to the summarization service and relay its JSON body.
#[instrument(skip(state, body))]
pub async fn summary(
    State(state): State<AppState>,
    Json(body): Json<SummaryRequest>,
) -> Result<Json<Value>> {
    let prompt = body
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("prompt is required".to_string()))?;

    let response = state.summarizer().summarize(&prompt).await?;

    Ok(Json(response))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_request_tolerates_missing_prompt() {
        let body: SummaryRequest = serde_json::from_str("{}").unwrap();
        assert!(body.prompt.is_none());
    }
}
