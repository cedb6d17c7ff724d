//! Integration tests for MobileMart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p mobilemart-cli -- migrate
//!
//! # Seed the catalog
//! cargo run -p mobilemart-cli -- seed -f data/mobiles.json
//!
//! # Start the API server
//! cargo run -p mobilemart-api
//!
//! # Run the ignored integration tests
//! cargo test -p mobilemart-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_accounts` - Registration, login, and display-name lookup
//! - `api_catalog` - Filter options and the filtered product listing
//! - `api_favorites` - Like/unlike toggle and favorites listing
//! - `api_summary` - Summarization proxy
//!
//! The base URL defaults to `http://localhost:3001` and is overridable via
//! `MOBILEMART_BASE_URL`.
