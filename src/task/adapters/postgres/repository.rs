//! `PostgreSQL` repository implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::account::domain::AccountId;
use crate::task::{
    domain::{PersistedTaskData, Progress, Rating, Task, TaskId, TaskName},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let progress_val = task.progress().as_str().to_owned();
        let report_val = task.report_submission().to_owned();
        let review_val = task.review().to_owned();
        let rating_val = i16::from(task.rating().value());
        let actual_val = task.actual_submission();
        let updated_val = task.updated_at();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set((
                        tasks::progress.eq(&progress_val),
                        tasks::report_submission.eq(&report_val),
                        tasks::review.eq(&review_val),
                        tasks::rating.eq(rating_val),
                        tasks::actual_submission.eq(actual_val),
                        tasks::updated_at.eq(updated_val),
                    ))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_owner(&self, owner: AccountId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_per_owner(&self) -> TaskRepositoryResult<HashMap<AccountId, usize>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .group_by(tasks::owner_id)
                .select((tasks::owner_id, diesel::dsl::count_star()))
                .load::<(uuid::Uuid, i64)>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter()
                .map(|(owner_id, count)| {
                    let count_value =
                        usize::try_from(count).map_err(TaskRepositoryError::persistence)?;
                    Ok((AccountId::from_uuid(owner_id), count_value))
                })
                .collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        task_name: task.name().as_str().to_owned(),
        assigned_on: task.assigned_on(),
        projected_submission: task.projected_submission(),
        actual_submission: task.actual_submission(),
        progress: task.progress().as_str().to_owned(),
        report_submission: task.report_submission().to_owned(),
        review: task.review().to_owned(),
        rating: i16::from(task.rating().value()),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        task_name,
        assigned_on,
        projected_submission,
        actual_submission,
        progress,
        report_submission,
        review,
        rating,
        created_at,
        updated_at,
    } = row;

    let parsed_name =
        TaskName::new(task_name).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let rating_raw =
        u8::try_from(rating).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_rating =
        Rating::new(rating_raw).map_err(TaskRepositoryError::invalid_persisted_data)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner: AccountId::from_uuid(owner_id),
        name: parsed_name,
        assigned_on,
        projected_submission,
        actual_submission,
        progress: Progress::new(progress),
        report_submission,
        review,
        rating: parsed_rating,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
