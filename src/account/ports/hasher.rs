//! Credential hashing port.

use crate::account::domain::{Password, PasswordHash};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential hasher operations.
pub type CredentialHashResult<T> = Result<T, CredentialHashError>;

/// One-way salted credential derivation contract.
///
/// Implementations are computationally expensive on purpose; they must run
/// the work somewhere that does not stall unrelated in-flight operations
/// (the bcrypt adapter uses the blocking thread pool).
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Derives a stored credential from a policy-validated password.
    ///
    /// Derivations are salted: hashing the same password twice yields
    /// different credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialHashError`] when derivation fails.
    async fn hash(&self, password: &Password) -> CredentialHashResult<PasswordHash>;

    /// Verifies a login candidate against a stored credential.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` is reserved for operational
    /// failure (a malformed stored credential or a scheduling error).
    async fn verify(&self, candidate: &str, credential: &PasswordHash)
    -> CredentialHashResult<bool>;
}

/// Operational failure inside a credential hasher.
///
/// The wrapped cause never contains the plaintext or the credential.
#[derive(Debug, Clone, Error)]
#[error("credential hashing failed: {0}")]
pub struct CredentialHashError(Arc<dyn std::error::Error + Send + Sync>);

impl CredentialHashError {
    /// Wraps a hasher failure cause.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
