//! Product repository for catalog queries.

use sqlx::PgPool;

use super::RepositoryError;
use super::filter::FilterQuery;
use crate::models::product::Product;

/// Repository for product database operations (read-only).
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the products matching a filter query, ordered by price ascending.
    ///
    /// Either the whole result set is returned or the request fails; no
    /// partial results.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn fetch_filtered(
        &self,
        filter: &FilterQuery,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut builder = filter.to_query_builder();
        let products = builder
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }
}
