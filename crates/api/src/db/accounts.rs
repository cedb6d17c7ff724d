//! Account repository for database operations.
//!
//! The stored secret only leaves this module through [`AccountRepository::get_secret`];
//! comparison lives in the auth service so the storage scheme can change without
//! touching handlers.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use mobilemart_core::AccountId;

use super::RepositoryError;
use crate::models::account::Account;

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the identifier already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        identifier: &AccountId,
        secret: &str,
        display_name: Option<&str>,
    ) -> Result<Account, RepositoryError> {
        let row = sqlx::query(
            r"
            INSERT INTO account (identifier, secret, display_name)
            VALUES ($1, $2, $3)
            RETURNING identifier, display_name, created_at
            ",
        )
        .bind(identifier)
        .bind(secret)
        .bind(display_name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("identifier already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(Account {
            identifier: row.try_get::<AccountId, _>("identifier")?,
            display_name: row.try_get::<Option<String>, _>("display_name")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }

    /// Get an account by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_identifier(
        &self,
        identifier: &AccountId,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT identifier, display_name, created_at
            FROM account
            WHERE identifier = $1
            ",
        )
        .bind(identifier)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(Account {
                identifier: r.try_get::<AccountId, _>("identifier")?,
                display_name: r.try_get::<Option<String>, _>("display_name")?,
                created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
            })),
            None => Ok(None),
        }
    }

    /// Get an account together with its stored secret, by identifier.
    ///
    /// Returns `None` if the account doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_secret(
        &self,
        identifier: &AccountId,
    ) -> Result<Option<(Account, String)>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT identifier, secret, display_name, created_at
            FROM account
            WHERE identifier = $1
            ",
        )
        .bind(identifier)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let secret = r.try_get::<String, _>("secret")?;
        let account = Account {
            identifier: r.try_get::<AccountId, _>("identifier")?,
            display_name: r.try_get::<Option<String>, _>("display_name")?,
            created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
        };

        Ok(Some((account, secret)))
    }
}
