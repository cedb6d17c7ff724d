//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid identifier format.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] mobilemart_core::IdentifierError),

    /// Invalid credentials (wrong secret or unknown account).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account not found.
    #[error("account not found")]
    AccountNotFound,

    /// Account already exists.
    #[error("account already exists")]
    AccountAlreadyExists,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
