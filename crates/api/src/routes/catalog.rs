//! Catalog route handlers: filter options and the filtered product listing.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::db::ProductRepository;
use crate::db::filter::FilterQuery;
use crate::error::{AppError, Result};
use crate::models::product::Product;
use crate::options::FilterOptions;
use crate::state::AppState;

/// Serve the filter options descriptor.
///
/// Returns a permanent error if the descriptor failed to load at startup;
/// the rest of the API keeps serving regardless.
#[instrument(skip(state))]
pub async fn options(State(state): State<AppState>) -> Result<Json<FilterOptions>> {
    let options = state
        .filter_options()
        .ok_or(AppError::OptionsUnavailable)?;

    Ok(Json(options.clone()))
}

/// Filtered product listing, ordered by price ascending.
///
/// Recognized keys contribute predicates per the filter table; everything
/// else in the query string is ignored. Malformed numeric values fail the
/// request before any store call.
#[instrument(skip(state, params))]
pub async fn filter(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Product>>> {
    let query =
        FilterQuery::from_params(&params).map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(predicates = query.predicates().len(), "Running catalog filter");

    let products = ProductRepository::new(state.pool())
        .fetch_filtered(&query)
        .await?;

    Ok(Json(products))
}
