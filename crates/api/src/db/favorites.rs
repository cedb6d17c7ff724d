//! Favorites ledger repository.
//!
//! Maintains the per-account like relations over products. Identity of a
//! favorite is the (account, product) pair; liking an already-liked product
//! is a conflict, unliking a never-liked product is a silent no-op.

use sqlx::PgPool;

use mobilemart_core::{AccountId, ProductId};

use super::RepositoryError;
use super::filter::PRODUCT_COLUMNS_ALIASED;
use crate::models::product::Product;

/// Repository for favorite database operations.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a like for (account, product).
    ///
    /// Concurrent likes for the same pair may race; the composite primary
    /// key makes the loser surface as a conflict rather than a duplicate row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the pair is already liked.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(
        &self,
        account: &AccountId,
        product: ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO favorite (account_id, product_id)
            VALUES ($1, $2)
            ",
        )
        .bind(account)
        .bind(product)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("product already in favorites".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Remove a like for (account, product).
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if the pair was never
    /// liked (still success).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(
        &self,
        account: &AccountId,
        product: ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM favorite
            WHERE account_id = $1 AND product_id = $2
            ",
        )
        .bind(account)
        .bind(product)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List an account's favorite products, most recently liked first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_account(
        &self,
        account: &AccountId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            r"
            SELECT {PRODUCT_COLUMNS_ALIASED}
            FROM favorite f
            JOIN product p ON f.product_id = p.id
            WHERE f.account_id = $1
            ORDER BY f.created_at DESC
            "
        ))
        .bind(account)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}
