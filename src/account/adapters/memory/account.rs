//! In-memory repository for account registration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Account, AccountId},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};

/// Thread-safe in-memory account repository.
///
/// The write lock is held across the email-uniqueness check and the
/// insert, so two concurrent registrations with the same email cannot
/// both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: HashMap<AccountId, Account>,
    email_index: HashMap<String, AccountId>,
    // Insertion sequence; `list_all` returns accounts in creation order.
    order: Vec<AccountId>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.accounts.contains_key(&account.id()) {
            return Err(AccountRepositoryError::DuplicateAccount(account.id()));
        }

        let email_key = account.email().as_str().to_owned();
        if state.email_index.contains_key(&email_key) {
            return Err(AccountRepositoryError::DuplicateEmail(
                account.email().clone(),
            ));
        }

        state.email_index.insert(email_key, account.id());
        state.order.push(account.id());
        state.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let account = state
            .email_index
            .get(email)
            .and_then(|id| state.accounts.get(id))
            .cloned();
        Ok(account)
    }

    async fn list_all(&self) -> AccountRepositoryResult<Vec<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let accounts = state
            .order
            .iter()
            .filter_map(|id| state.accounts.get(id).cloned())
            .collect();
        Ok(accounts)
    }
}
