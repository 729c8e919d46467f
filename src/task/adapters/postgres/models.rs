//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning account identifier.
    pub owner_id: uuid::Uuid,
    /// Task name.
    pub task_name: String,
    /// Assignment date.
    pub assigned_on: DateTime<Utc>,
    /// Projected submission date.
    pub projected_submission: DateTime<Utc>,
    /// Actual submission date, when set.
    pub actual_submission: Option<DateTime<Utc>>,
    /// Free-form progress marker.
    pub progress: String,
    /// Free-form report-submission marker.
    pub report_submission: String,
    /// Free-form review text.
    pub review: String,
    /// Rating on a 0 to 5 scale.
    pub rating: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning account identifier.
    pub owner_id: uuid::Uuid,
    /// Task name.
    pub task_name: String,
    /// Assignment date.
    pub assigned_on: DateTime<Utc>,
    /// Projected submission date.
    pub projected_submission: DateTime<Utc>,
    /// Actual submission date, when set.
    pub actual_submission: Option<DateTime<Utc>>,
    /// Free-form progress marker.
    pub progress: String,
    /// Free-form report-submission marker.
    pub report_submission: String,
    /// Free-form review text.
    pub review: String,
    /// Rating on a 0 to 5 scale.
    pub rating: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
