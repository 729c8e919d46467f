//! Bcrypt adapter for the credential hashing port.

use crate::account::{
    domain::{Password, PasswordHash},
    ports::{CredentialHashError, CredentialHashResult, CredentialHasher},
};
use async_trait::async_trait;

/// Default bcrypt work factor.
///
/// Ten rounds puts a single verification in the tens of milliseconds on
/// commodity hardware.
const DEFAULT_WORK_FACTOR: u32 = 10;

/// Bcrypt-backed credential hasher.
///
/// Derivation and verification run via [`tokio::task::spawn_blocking`] so
/// the CPU-bound work never stalls unrelated in-flight operations on the
/// async runtime.
#[derive(Debug, Clone)]
pub struct BcryptCredentialHasher {
    cost: u32,
}

impl BcryptCredentialHasher {
    /// Creates a hasher with the default work factor of 10 rounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cost: DEFAULT_WORK_FACTOR,
        }
    }

    /// Creates a hasher with an explicit work factor.
    ///
    /// The cost must lie in the range bcrypt accepts (4 to 31);
    /// derivation fails otherwise. Tests use the minimum to keep
    /// derivations fast.
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptCredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialHasher for BcryptCredentialHasher {
    async fn hash(&self, password: &Password) -> CredentialHashResult<PasswordHash> {
        let cost = self.cost;
        let secret = password.as_str().to_owned();
        let derived = tokio::task::spawn_blocking(move || bcrypt::hash(secret, cost))
            .await
            .map_err(CredentialHashError::new)?
            .map_err(CredentialHashError::new)?;
        Ok(PasswordHash::new(derived))
    }

    async fn verify(
        &self,
        candidate: &str,
        credential: &PasswordHash,
    ) -> CredentialHashResult<bool> {
        let supplied = candidate.to_owned();
        let stored = credential.as_str().to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(supplied, &stored))
            .await
            .map_err(CredentialHashError::new)?
            .map_err(CredentialHashError::new)
    }
}
