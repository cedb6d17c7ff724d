//! Product domain types.

use serde::Serialize;

use mobilemart_core::ProductId;

/// A phone record from the product catalog.
///
/// Read-only from the API's perspective; rows are loaded by the
/// `mobilemart-cli seed` command, never written by request handlers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Manufacturer brand (e.g., "Apple").
    pub brand: String,
    /// Model name.
    pub model: String,
    /// RAM in gigabytes.
    pub ram: f64,
    /// Processor/chipset name.
    pub processor: String,
    /// Front camera spec (e.g., "12MP").
    pub front_camera: String,
    /// Back camera spec.
    pub back_camera: String,
    /// Price in rupees.
    pub price: i32,
    /// Battery capacity in mAh.
    pub battery_capacity: i32,
    /// Weight in grams.
    pub mobile_weight: f64,
    /// Screen size in inches.
    pub screen_size: f64,
    /// Year the model launched.
    pub launched_year: i32,
}
