//! Read-model types returned by the reporting service.

use crate::account::domain::{Account, AccountId, DisplayName, EmailAddress, PhoneNumber, Role};
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An account's public fields plus its task count.
///
/// The stored credential is deliberately not part of this view; accounts
/// with no tasks report a count of zero rather than being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    /// Account identifier.
    pub id: AccountId,
    /// Display name.
    pub display_name: DisplayName,
    /// Email address.
    pub email: EmailAddress,
    /// Phone number.
    pub phone: PhoneNumber,
    /// Account role.
    pub role: Role,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of tasks owned by this account.
    pub task_count: usize,
}

impl AccountSummary {
    /// Builds a summary from an account and its task count.
    #[must_use]
    pub fn from_account(account: &Account, task_count: usize) -> Self {
        Self {
            id: account.id(),
            display_name: account.display_name().clone(),
            email: account.email().clone(),
            phone: account.phone().clone(),
            role: account.role(),
            created_at: account.created_at(),
            task_count,
        }
    }
}

/// A task joined with its owner's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskWithOwner {
    /// The task record.
    pub task: Task,
    /// Display name of the owning account.
    pub owner_name: DisplayName,
}
