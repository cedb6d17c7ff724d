//! Integration tests for the favorites ledger.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied and the
//!   catalog seeded
//! - The API server running (cargo run -p mobilemart-api)
//!
//! Run with: cargo test -p mobilemart-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn api_base_url() -> String {
    std::env::var("MOBILEMART_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Test helper: register a fresh account and return its identifier.
async fn register_test_account(client: &Client) -> String {
    let base_url = api_base_url();
    let identifier = format!("it-{}", Uuid::new_v4());

    let resp = client
        .post(format!("{base_url}/api/register"))
        .json(&json!({"identifier": identifier, "secret": "hunter2"}))
        .send()
        .await
        .expect("Failed to register test account");

    assert_eq!(resp.status(), StatusCode::OK);
    identifier
}

/// Test helper: product ids from the catalog, cheapest first.
async fn catalog_product_ids(client: &Client) -> Vec<i64> {
    let base_url = api_base_url();
    let resp = client
        .get(format!("{base_url}/api/mobile/filter"))
        .send()
        .await
        .expect("Failed to fetch catalog");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|p| p["id"].as_i64().expect("id missing"))
        .collect()
}

/// Test helper: set the like state for one (account, product) pair.
async fn set_like(client: &Client, identifier: &str, product_id: i64, desired: bool) -> StatusCode {
    let base_url = api_base_url();
    let resp = client
        .post(format!("{base_url}/api/mobile/like"))
        .json(&json!({
            "productId": product_id,
            "identifier": identifier,
            "desiredState": desired,
        }))
        .send()
        .await
        .expect("Failed to send like request");
    resp.status()
}

/// Test helper: fetch the favorites listing for an account.
async fn fetch_favorites(client: &Client, identifier: &str) -> Vec<Value> {
    let base_url = api_base_url();
    let resp = client
        .get(format!(
            "{base_url}/api/mobile/favorites?identifier={identifier}"
        ))
        .send()
        .await
        .expect("Failed to fetch favorites");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    body.as_array().expect("Expected a JSON array").clone()
}

// ============================================================================
// Like/Unlike Round-Trip Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and seeded catalog"]
async fn test_like_list_unlike_round_trip() {
    let client = Client::new();
    let identifier = register_test_account(&client).await;
    let ids = catalog_product_ids(&client).await;
    let Some(&product_id) = ids.first() else {
        return;
    };

    // Fresh account starts with no favorites
    assert!(fetch_favorites(&client, &identifier).await.is_empty());

    // Like, then the product appears in the listing
    assert_eq!(set_like(&client, &identifier, product_id, true).await, StatusCode::OK);
    let favorites = fetch_favorites(&client, &identifier).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"].as_i64(), Some(product_id));

    // Unlike, then the listing is empty again
    assert_eq!(set_like(&client, &identifier, product_id, false).await, StatusCode::OK);
    assert!(fetch_favorites(&client, &identifier).await.is_empty());
}

#[tokio::test]
#[ignore = "Requires running API server and seeded catalog"]
async fn test_double_like_conflicts() {
    let client = Client::new();
    let identifier = register_test_account(&client).await;
    let ids = catalog_product_ids(&client).await;
    let Some(&product_id) = ids.first() else {
        return;
    };

    assert_eq!(set_like(&client, &identifier, product_id, true).await, StatusCode::OK);
    assert_eq!(
        set_like(&client, &identifier, product_id, true).await,
        StatusCode::CONFLICT
    );

    // The listing still holds exactly one entry
    assert_eq!(fetch_favorites(&client, &identifier).await.len(), 1);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded catalog"]
async fn test_unlike_never_liked_product_succeeds() {
    let client = Client::new();
    let identifier = register_test_account(&client).await;
    let ids = catalog_product_ids(&client).await;
    let Some(&product_id) = ids.first() else {
        return;
    };

    assert_eq!(set_like(&client, &identifier, product_id, false).await, StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded catalog"]
async fn test_favorites_listed_newest_first() {
    let client = Client::new();
    let identifier = register_test_account(&client).await;
    let ids = catalog_product_ids(&client).await;
    if ids.len() < 2 {
        return;
    }

    // Like two products in order; the second like must list first
    assert_eq!(set_like(&client, &identifier, ids[0], true).await, StatusCode::OK);
    assert_eq!(set_like(&client, &identifier, ids[1], true).await, StatusCode::OK);

    let favorites = fetch_favorites(&client, &identifier).await;
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["id"].as_i64(), Some(ids[1]));
    assert_eq!(favorites[1]["id"].as_i64(), Some(ids[0]));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_like_missing_fields_rejected() {
    let client = Client::new();
    let base_url = api_base_url();

    let resp = client
        .post(format!("{base_url}/api/mobile/like"))
        .json(&json!({"productId": 1}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_favorites_missing_identifier_rejected() {
    let client = Client::new();
    let base_url = api_base_url();

    let resp = client
        .get(format!("{base_url}/api/mobile/favorites"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
