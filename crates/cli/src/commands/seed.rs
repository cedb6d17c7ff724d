//! Seed the phone catalog from a JSON file.
//!
//! The file is a JSON array of product objects with snake_case fields
//! matching the `product` table columns (minus `id`, which is assigned by
//! the database). The file is read and validated in full before any row is
//! written.

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::{error, info};

use mobilemart_api::db;

/// One catalog entry as it appears in the seed file.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    brand: String,
    model: String,
    ram: f64,
    processor: String,
    front_camera: String,
    back_camera: String,
    price: i32,
    battery_capacity: i32,
    mobile_weight: f64,
    screen_size: f64,
    launched_year: i32,
}

/// Load the catalog from a JSON file.
///
/// # Arguments
///
/// * `file_path` - Path to the catalog JSON file
/// * `replace` - If true, delete existing products first
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file cannot
/// be read or parsed, or database operations fail.
pub async fn catalog(file_path: &str, replace: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MOBILEMART_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "MOBILEMART_DATABASE_URL not set")?;

    // Verify file exists
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading catalog from file");

    // Read and parse the whole file before touching the database
    let content = tokio::fs::read_to_string(path).await?;
    let products: Vec<SeedProduct> = serde_json::from_str(&content)?;

    if products.is_empty() {
        return Err("Seed file contains no products".into());
    }

    info!(products = products.len(), "Parsed catalog file");

    // Connect to database
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    if replace {
        let deleted = sqlx::query("DELETE FROM product")
            .execute(&pool)
            .await?
            .rows_affected();
        info!(deleted, "Cleared existing catalog");
    }

    let mut inserted: u64 = 0;
    let mut failed: u64 = 0;

    for product in &products {
        let result = sqlx::query(
            "INSERT INTO product (brand, model, ram, processor, front_camera, back_camera, \
             price, battery_capacity, mobile_weight, screen_size, launched_year) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&product.brand)
        .bind(&product.model)
        .bind(product.ram)
        .bind(&product.processor)
        .bind(&product.front_camera)
        .bind(&product.back_camera)
        .bind(product.price)
        .bind(product.battery_capacity)
        .bind(product.mobile_weight)
        .bind(product.screen_size)
        .bind(product.launched_year)
        .execute(&pool)
        .await;

        match result {
            Ok(_) => inserted += 1,
            Err(e) => {
                failed += 1;
                error!(brand = %product.brand, model = %product.model, "Insert failed: {e}");
            }
        }
    }

    info!("Seeding complete!");
    info!("  Products inserted: {inserted}");
    if failed > 0 {
        error!("  Products failed: {failed}");
    }

    Ok(())
}
