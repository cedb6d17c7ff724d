//! Authentication service.
//!
//! Registration, login, and display-name lookup over the account store.
//!
//! Secrets are compared in plaintext, matching the account store this
//! service fronts. The comparison is confined to [`verify_secret`] so a
//! salted-hash scheme can be substituted without touching any route handler.

mod error;

pub use error::AuthError;

use sqlx::PgPool;

use mobilemart_core::AccountId;

use crate::db::RepositoryError;
use crate::db::accounts::AccountRepository;
use crate::models::account::Account;

/// Authentication service.
pub struct AuthService<'a> {
    accounts: AccountRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
        }
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidIdentifier` if the identifier is malformed.
    /// Returns `AuthError::AccountAlreadyExists` if the identifier is taken.
    pub async fn register(
        &self,
        identifier: &str,
        secret: &str,
        display_name: Option<&str>,
    ) -> Result<Account, AuthError> {
        let identifier = AccountId::parse(identifier)?;

        let account = self
            .accounts
            .create(&identifier, secret, display_name)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::AccountAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(account)
    }

    /// Login with identifier and secret.
    ///
    /// Unknown identifiers and wrong secrets are indistinguishable to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the identifier/secret is wrong.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<Account, AuthError> {
        let identifier =
            AccountId::parse(identifier).map_err(|_| AuthError::InvalidCredentials)?;

        let (account, stored_secret) = self
            .accounts
            .get_secret(&identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_secret(secret, &stored_secret) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account)
    }

    /// Get an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountNotFound` if the account doesn't exist.
    pub async fn get_account(&self, identifier: &AccountId) -> Result<Account, AuthError> {
        self.accounts
            .get_by_identifier(identifier)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }
}

/// Compare a provided secret against the stored one.
///
/// Plaintext equality today; swap this (and the storage written by
/// `AccountRepository::create`) to move to a hashed scheme.
fn verify_secret(provided: &str, stored: &str) -> bool {
    provided == stored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_secret_matches() {
        assert!(verify_secret("hunter2", "hunter2"));
    }

    #[test]
    fn test_verify_secret_rejects_mismatch() {
        assert!(!verify_secret("hunter2", "hunter3"));
        assert!(!verify_secret("", "hunter2"));
        assert!(!verify_secret("hunter2", ""));
    }
}
