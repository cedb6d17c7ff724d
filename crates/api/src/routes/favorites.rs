//! Favorites route handlers: listing and the like/unlike toggle.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use mobilemart_core::{AccountId, ProductId};

use crate::db::FavoriteRepository;
use crate::error::{AppError, Result};
use crate::models::product::Product;
use crate::state::AppState;

/// Favorites listing query parameters.
#[derive(Debug, Deserialize)]
pub struct FavoritesQuery {
    pub identifier: Option<String>,
}

/// Like/unlike toggle request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub product_id: Option<ProductId>,
    pub identifier: Option<String>,
    pub desired_state: Option<bool>,
}

/// Parse a required account identifier or fail as a client input error.
fn parse_identifier(value: Option<String>) -> Result<AccountId> {
    let raw = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest("identifier is required".to_string()))?;
    AccountId::parse(&raw).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// List an account's favorite products, most recently liked first.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FavoritesQuery>,
) -> Result<Json<Vec<Product>>> {
    let account = parse_identifier(query.identifier)?;

    let products = FavoriteRepository::new(state.pool())
        .list_for_account(&account)
        .await?;

    Ok(Json(products))
}

/// Toggle the like state for one (account, product) pair.
///
/// Liking an already-liked product is a conflict (no server-side upsert);
/// unliking a never-liked product succeeds with no visible change.
#[instrument(skip(state, body))]
pub async fn toggle(
    State(state): State<AppState>,
    Json(body): Json<LikeRequest>,
) -> Result<Json<Value>> {
    let account = parse_identifier(body.identifier)?;
    let product = body
        .product_id
        .ok_or_else(|| AppError::BadRequest("productId is required".to_string()))?;
    let desired = body
        .desired_state
        .ok_or_else(|| AppError::BadRequest("desiredState is required".to_string()))?;

    let favorites = FavoriteRepository::new(state.pool());

    if desired {
        favorites.add(&account, product).await?;
    } else {
        // Deleting a never-liked pair is still success
        let removed = favorites.remove(&account, product).await?;
        tracing::debug!(%account, %product, removed, "Unlike processed");
    }

    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier_rejects_missing_empty_and_malformed() {
        assert!(parse_identifier(None).is_err());
        assert!(parse_identifier(Some(String::new())).is_err());
        assert!(parse_identifier(Some("two words".to_string())).is_err());
        assert_eq!(
            parse_identifier(Some("chinmay".to_string())).unwrap().as_str(),
            "chinmay"
        );
    }

    #[test]
    fn test_like_request_field_names() {
        let body: LikeRequest = serde_json::from_str(
            r#"{"productId": 7, "identifier": "u1", "desiredState": true}"#,
        )
        .unwrap();
        assert_eq!(body.product_id, Some(ProductId::new(7)));
        assert_eq!(body.desired_state, Some(true));
    }
}
