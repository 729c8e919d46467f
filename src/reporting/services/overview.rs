//! Service layer for account/task aggregation listings.

use crate::account::{
    domain::AccountId,
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::reporting::views::{AccountSummary, TaskWithOwner};
use crate::task::{
    domain::TaskId,
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for reporting queries.
#[derive(Debug, Error)]
pub enum ReportingError {
    /// The requested task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A task references an account the store no longer returns.
    ///
    /// Accounts are never deleted by this core, so this indicates a
    /// referential inconsistency inside the store rather than a caller
    /// mistake.
    #[error("task {task} references missing account {owner}")]
    OwnerMissing {
        /// The task whose owner could not be resolved.
        task: TaskId,
        /// The unresolvable owning account identifier.
        owner: AccountId,
    },

    /// One of the underlying stores failed.
    #[error("reporting query failed: {0}")]
    Store(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl From<AccountRepositoryError> for ReportingError {
    fn from(err: AccountRepositoryError) -> Self {
        Self::Store(Arc::new(err))
    }
}

impl From<TaskRepositoryError> for ReportingError {
    fn from(err: TaskRepositoryError) -> Self {
        Self::Store(Arc::new(err))
    }
}

/// Result type for reporting service operations.
pub type ReportingResult<T> = Result<T, ReportingError>;

/// Read-only aggregation service over accounts and tasks.
///
/// Each call reads one snapshot of each store; no consistency is promised
/// across calls.
#[derive(Clone)]
pub struct ReportingService<A, T>
where
    A: AccountRepository,
    T: TaskRepository,
{
    accounts: Arc<A>,
    tasks: Arc<T>,
}

impl<A, T> ReportingService<A, T>
where
    A: AccountRepository,
    T: TaskRepository,
{
    /// Creates a new reporting service.
    #[must_use]
    pub const fn new(accounts: Arc<A>, tasks: Arc<T>) -> Self {
        Self { accounts, tasks }
    }

    /// Returns every account's public fields plus its task count.
    ///
    /// Accounts are listed in creation order; accounts without tasks
    /// report a count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::Store`] when either store fails.
    pub async fn list_accounts_with_task_counts(&self) -> ReportingResult<Vec<AccountSummary>> {
        let accounts = self.accounts.list_all().await?;
        let mut counts = self.tasks.count_per_owner().await?;

        let summaries = accounts
            .iter()
            .map(|account| {
                let task_count = counts.remove(&account.id()).unwrap_or(0);
                AccountSummary::from_account(account, task_count)
            })
            .collect();
        Ok(summaries)
    }

    /// Returns all tasks owned by the given account, each paired with the
    /// owner's display name.
    ///
    /// Tasks are listed in creation order. An owner that does not exist
    /// yields an empty list: tasks only ever reference existing accounts
    /// and accounts are never deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::Store`] when either store fails.
    pub async fn list_tasks_for_owner(
        &self,
        owner_id: AccountId,
    ) -> ReportingResult<Vec<TaskWithOwner>> {
        let Some(owner) = self.accounts.find_by_id(owner_id).await? else {
            return Ok(Vec::new());
        };

        let tasks = self.tasks.find_by_owner(owner_id).await?;
        let listed = tasks
            .into_iter()
            .map(|task| TaskWithOwner {
                task,
                owner_name: owner.display_name().clone(),
            })
            .collect();
        Ok(listed)
    }

    /// Returns a single task paired with its owner's display name.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::TaskNotFound`] when the task does not
    /// exist, [`ReportingError::OwnerMissing`] when its owner cannot be
    /// resolved, or [`ReportingError::Store`] when either store fails.
    pub async fn get_task(&self, task_id: TaskId) -> ReportingResult<TaskWithOwner> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(ReportingError::TaskNotFound(task_id))?;

        let owner_id = task.owner();
        let owner = self
            .accounts
            .find_by_id(owner_id)
            .await?
            .ok_or(ReportingError::OwnerMissing {
                task: task_id,
                owner: owner_id,
            })?;

        Ok(TaskWithOwner {
            owner_name: owner.display_name().clone(),
            task,
        })
    }
}
