//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (database)
//!
//! # Accounts
//! POST /api/register              - Create an account
//! POST /api/login                 - Authenticate
//! GET  /api/user?identifier=      - Display-name lookup
//!
//! # Catalog
//! GET  /api/mobile/options        - Filter options descriptor
//! GET  /api/mobile/filter?...     - Filtered product listing
//!
//! # Favorites
//! GET  /api/mobile/favorites?identifier= - Favorite products, newest like first
//! POST /api/mobile/like           - Like/unlike toggle
//!
//! # Summarization proxy
//! POST /api/mobile/summary        - Forward prompt to the summarization service
//! ```
//!
//! Every request is stateless; handlers perform presence checks before any
//! store call and shape all failures as `{"error": "..."}` JSON.

pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod summary;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/user", get(auth::user))
}

/// Create the mobile catalog routes router.
pub fn mobile_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(catalog::options))
        .route("/filter", get(catalog::filter))
        .route("/favorites", get(favorites::list))
        .route("/like", post(favorites::toggle))
        .route("/summary", post(summary::summary))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .nest("/mobile", mobile_routes())
}
