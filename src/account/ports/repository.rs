//! Repository port for account persistence and lookup.

use crate::account::domain::{Account, AccountId, EmailAddress};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
///
/// Accounts are insert-only in this core: there is no update or delete
/// operation. Email uniqueness is the store's atomic guarantee — the
/// check and the insert must not be separable by a concurrent writer.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateEmail`] when the email is
    /// already registered, or [`AccountRepositoryError::DuplicateAccount`]
    /// when the account ID already exists.
    async fn create(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Finds an account by internal identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account by email address.
    ///
    /// The match is case-sensitive and exact against the stored value.
    /// Returns `None` when no account has the given email.
    async fn find_by_email(&self, email: &str) -> AccountRepositoryResult<Option<Account>>;

    /// Returns all accounts in creation order.
    async fn list_all(&self) -> AccountRepositoryResult<Vec<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same identifier already exists.
    #[error("duplicate account identifier: {0}")]
    DuplicateAccount(AccountId),

    /// An account with the same email already exists.
    #[error("duplicate email: {0}")]
    DuplicateEmail(EmailAddress),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a data-quality or parsing error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
