//! Port contracts for account persistence and credential hashing.
//!
//! Ports define infrastructure-agnostic interfaces used by the credential
//! service.

pub mod hasher;
pub mod repository;

pub use hasher::{CredentialHashError, CredentialHashResult, CredentialHasher};
pub use repository::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
