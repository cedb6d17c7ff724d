//! Account route handlers: register, login, and display-name lookup.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use mobilemart_core::AccountId;

use crate::error::{AppError, Result};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub identifier: Option<String>,
    pub secret: Option<String>,
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: Option<String>,
    pub secret: Option<String>,
}

/// Display-name lookup query parameters.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub identifier: Option<String>,
}

/// Reject absent or empty required fields before touching the store.
fn require(value: Option<String>, name: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{name} is required")))
}

/// Create an account.
#[instrument(skip(state, body))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<Value>> {
    let identifier = require(body.identifier, "identifier")?;
    let secret = require(body.secret, "secret")?;

    let auth = AuthService::new(state.pool());
    let account = auth
        .register(&identifier, &secret, body.display_name.as_deref())
        .await?;

    tracing::info!(identifier = %account.identifier, "Account registered");

    Ok(Json(json!({ "success": true })))
}

/// Authenticate with identifier and secret.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let identifier = require(body.identifier, "identifier")?;
    let secret = require(body.secret, "secret")?;

    let auth = AuthService::new(state.pool());
    let account = auth.login(&identifier, &secret).await?;

    Ok(Json(json!({
        "success": true,
        "identifier": account.identifier,
        "displayName": account.display_name,
    })))
}

/// Look up an account's display name.
#[instrument(skip(state))]
pub async fn user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Value>> {
    let identifier = require(query.identifier, "identifier")?;
    let identifier =
        AccountId::parse(&identifier).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let auth = AuthService::new(state.pool());
    let account = auth.get_account(&identifier).await?;

    Ok(Json(json!({ "displayName": account.display_name })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_missing_and_empty() {
        assert!(require(None, "identifier").is_err());
        assert!(require(Some(String::new()), "identifier").is_err());
        assert_eq!(require(Some("x".to_string()), "identifier").unwrap(), "x");
    }

    #[test]
    fn test_register_request_accepts_optional_display_name() {
        let body: RegisterRequest =
            serde_json::from_str(r#"{"identifier": "u1", "secret": "s"}"#).unwrap();
        assert_eq!(body.identifier.as_deref(), Some("u1"));
        assert!(body.display_name.is_none());

        let body: RegisterRequest = serde_json::from_str(
            r#"{"identifier": "u1", "secret": "s", "displayName": "User One"}"#,
        )
        .unwrap();
        assert_eq!(body.display_name.as_deref(), Some("User One"));
    }
}
