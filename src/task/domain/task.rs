//! Task aggregate root and partial-update payload.

use super::{Progress, Rating, TaskId, TaskName};
use crate::account::domain::AccountId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Report-submission marker of every freshly assigned task.
const INITIAL_REPORT_SUBMISSION: &str = "Not submitted";

/// Review text of every freshly assigned task.
const INITIAL_REVIEW: &str = "Pending";

/// Task aggregate root.
///
/// A task belongs to exactly one owning account, fixed at assignment; the
/// owner reference is checked against the account store at creation and
/// never changes afterwards. All lifecycle fields are mutated exclusively
/// through [`Task::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    owner: AccountId,
    name: TaskName,
    assigned_on: DateTime<Utc>,
    projected_submission: DateTime<Utc>,
    actual_submission: Option<DateTime<Utc>>,
    progress: Progress,
    report_submission: String,
    review: String,
    rating: Rating,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning account identifier.
    pub owner: AccountId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted assignment date.
    pub assigned_on: DateTime<Utc>,
    /// Persisted projected submission date.
    pub projected_submission: DateTime<Utc>,
    /// Persisted actual submission date, if any.
    pub actual_submission: Option<DateTime<Utc>>,
    /// Persisted progress marker.
    pub progress: Progress,
    /// Persisted report-submission marker.
    pub report_submission: String,
    /// Persisted review text.
    pub review: String,
    /// Persisted rating.
    pub rating: Rating,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied to a task's lifecycle fields.
///
/// Every field is present-or-absent. An absent field keeps the prior
/// value — except `actual_submission`, whose absence means "clear": the
/// update is not a sparse patch for that one field, and every update call
/// either sets it or removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    progress: Option<Progress>,
    report_submission: Option<String>,
    review: Option<String>,
    rating: Option<Rating>,
    actual_submission: Option<DateTime<Utc>>,
}

impl TaskChanges {
    /// Creates an empty change set.
    ///
    /// Applying it leaves every field untouched apart from clearing the
    /// actual submission date.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the progress marker.
    #[must_use]
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sets the report-submission marker.
    #[must_use]
    pub fn with_report_submission(mut self, report_submission: impl Into<String>) -> Self {
        self.report_submission = Some(report_submission.into());
        self
    }

    /// Sets the review text.
    #[must_use]
    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.review = Some(review.into());
        self
    }

    /// Sets the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the actual submission date for this update.
    #[must_use]
    pub fn with_actual_submission(mut self, actual_submission: DateTime<Utc>) -> Self {
        self.actual_submission = Some(actual_submission);
        self
    }
}

impl Task {
    /// Creates a freshly assigned task.
    ///
    /// New tasks start with progress "Not started", report submission
    /// "Not submitted", review "Pending", a rating of 0, and no actual
    /// submission date.
    #[must_use]
    pub fn new_assignment(
        owner: AccountId,
        name: TaskName,
        assigned_on: DateTime<Utc>,
        projected_submission: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner,
            name,
            assigned_on,
            projected_submission,
            actual_submission: None,
            progress: Progress::not_started(),
            report_submission: INITIAL_REPORT_SUBMISSION.to_owned(),
            review: INITIAL_REVIEW.to_owned(),
            rating: Rating::default(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            name: data.name,
            assigned_on: data.assigned_on,
            projected_submission: data.projected_submission,
            actual_submission: data.actual_submission,
            progress: data.progress,
            report_submission: data.report_submission,
            review: data.review,
            rating: data.rating,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning account identifier.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the assignment date.
    #[must_use]
    pub const fn assigned_on(&self) -> DateTime<Utc> {
        self.assigned_on
    }

    /// Returns the projected submission date.
    #[must_use]
    pub const fn projected_submission(&self) -> DateTime<Utc> {
        self.projected_submission
    }

    /// Returns the actual submission date, if set.
    #[must_use]
    pub const fn actual_submission(&self) -> Option<DateTime<Utc>> {
        self.actual_submission
    }

    /// Returns the progress marker.
    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Returns the report-submission marker.
    #[must_use]
    pub fn report_submission(&self) -> &str {
        &self.report_submission
    }

    /// Returns the review text.
    #[must_use]
    pub fn review(&self) -> &str {
        &self.review
    }

    /// Returns the rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update to the lifecycle fields.
    ///
    /// Present fields replace the prior value; absent fields are kept —
    /// except the actual submission date, which is overwritten with the
    /// supplied value or cleared when absent.
    pub fn apply_update(&mut self, changes: TaskChanges, clock: &impl Clock) {
        if let Some(progress) = changes.progress {
            self.progress = progress;
        }
        if let Some(report_submission) = changes.report_submission {
            self.report_submission = report_submission;
        }
        if let Some(review) = changes.review {
            self.review = review;
        }
        if let Some(rating) = changes.rating {
            self.rating = rating;
        }
        // Absence clears; this field is not sparse-patched.
        self.actual_submission = changes.actual_submission;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
