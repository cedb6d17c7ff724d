//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Every failure renders as a stable JSON object `{"error": "..."}`; store and
//! upstream detail is logged server-side and never leaked to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::summarizer::SummaryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Summarization service operation failed.
    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    /// Filter options descriptor failed to load at startup.
    #[error("Filter options not loaded")]
    OptionsUnavailable,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry (conflicts are a client-class failure)
        if matches!(
            self,
            Self::Database(RepositoryError::Database(_) | RepositoryError::DataCorruption(_))
                | Self::Internal(_)
                | Self::Summary(_)
                | Self::OptionsUnavailable
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            // Duplicate-key conflicts are a client-class failure, not a store fault
            Self::Database(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) | Self::OptionsUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Summary(_) => StatusCode::BAD_GATEWAY,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::AccountAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
                AuthError::AccountNotFound => StatusCode::NOT_FOUND,
                AuthError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(RepositoryError::Conflict(msg)) => msg.clone(),
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Summary(_) => "Failed to get summary from service".to_string(),
            Self::OptionsUnavailable => "Filter options not loaded".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid identifier or secret".to_string(),
                AuthError::AccountAlreadyExists => {
                    "An account with this identifier already exists".to_string()
                }
                AuthError::InvalidIdentifier(e) => e.to_string(),
                AuthError::AccountNotFound => "Account not found".to_string(),
                AuthError::Repository(_) => "Internal server error".to_string(),
            },
            _ => self.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
