//! Account domain types.
//!
//! These types represent validated domain objects separate from database row types.

use chrono::{DateTime, Utc};

use mobilemart_core::AccountId;

/// A registered account (domain type).
///
/// The secret is deliberately absent here; it only surfaces through
/// [`crate::db::AccountRepository::get_secret`] during login.
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique, immutable account identifier.
    pub identifier: AccountId,
    /// Optional display name shown in the UI.
    pub display_name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
