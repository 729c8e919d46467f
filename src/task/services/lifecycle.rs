//! Service layer for task assignment and lifecycle updates.

use crate::account::{
    domain::AccountId,
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::task::{
    domain::{Task, TaskChanges, TaskDomainError, TaskId, TaskName},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning a task to an account.
///
/// The dates arrive already parsed; turning transport-level strings into
/// calendar timestamps is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    owner_id: AccountId,
    task_name: String,
    assigned_on: DateTime<Utc>,
    projected_submission: DateTime<Utc>,
}

impl AssignTaskRequest {
    /// Creates an assignment request with all required fields.
    #[must_use]
    pub fn new(
        owner_id: AccountId,
        task_name: impl Into<String>,
        assigned_on: DateTime<Utc>,
        projected_submission: DateTime<Utc>,
    ) -> Self {
        Self {
            owner_id,
            task_name: task_name.into(),
            assigned_on,
            projected_submission,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed; the store was not touched.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The owning account referenced by an assignment does not exist.
    #[error("owner account not found: {0}")]
    OwnerNotFound(AccountId),

    /// The task referenced by an update does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task or account store failed.
    #[error("task store failure: {0}")]
    Store(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(Arc::new(other)),
        }
    }
}

impl From<AccountRepositoryError> for TaskLifecycleError {
    fn from(err: AccountRepositoryError) -> Self {
        Self::Store(Arc::new(err))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task assignment and update orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, A, C>
where
    R: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    accounts: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> TaskLifecycleService<R, A, C>
where
    R: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, accounts: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            accounts,
            clock,
        }
    }

    /// Assigns a new task to an existing account.
    ///
    /// The owner is resolved through the account store before the insert;
    /// the window between that check and the insert is accepted, since
    /// accounts are never deleted by this core.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the task name is
    /// empty, [`TaskLifecycleError::OwnerNotFound`] when the owner does
    /// not exist, or [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn assign(&self, request: AssignTaskRequest) -> TaskLifecycleResult<Task> {
        let AssignTaskRequest {
            owner_id,
            task_name,
            assigned_on,
            projected_submission,
        } = request;

        let name = TaskName::new(task_name)?;

        let owner = self.accounts.find_by_id(owner_id).await?;
        if owner.is_none() {
            return Err(TaskLifecycleError::OwnerNotFound(owner_id));
        }

        let task = Task::new_assignment(
            owner_id,
            name,
            assigned_on,
            projected_submission,
            &*self.clock,
        );
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Present fields replace the prior value; absent fields are kept —
    /// except the actual submission date, which every update either sets
    /// or clears (see [`TaskChanges`]).
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not
    /// exist, or [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn update(
        &self,
        task_id: TaskId,
        changes: TaskChanges,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;

        task.apply_update(changes, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }
}
