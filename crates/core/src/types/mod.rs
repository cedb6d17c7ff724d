//! Shared newtype wrappers.

pub mod id;
pub mod identifier;

pub use id::ProductId;
pub use identifier::{AccountId, IdentifierError};
