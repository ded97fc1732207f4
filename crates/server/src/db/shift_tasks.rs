//! Shift task repository for database operations.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use barback_core::ShiftTaskId;

use super::RepositoryError;
use crate::models::{NewShiftTask, ShiftTask};

/// Internal row type for shift task queries.
#[derive(Debug, sqlx::FromRow)]
struct ShiftTaskRow {
    id: i32,
    shift_name: String,
    checklist: Value,
    created_at: DateTime<Utc>,
}

impl From<ShiftTaskRow> for ShiftTask {
    fn from(row: ShiftTaskRow) -> Self {
        Self {
            id: ShiftTaskId::new(row.id),
            shift_name: row.shift_name,
            checklist: row.checklist,
            created_at: row.created_at,
        }
    }
}

/// Repository for shift task database operations.
///
/// The checklist column is pass-through storage: any JSON value goes in
/// and comes back unchanged, entry order included.
pub struct ShiftTaskRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShiftTaskRepository<'a> {
    /// Create a new shift task repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new shift task.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewShiftTask) -> Result<ShiftTask, RepositoryError> {
        let row: ShiftTaskRow = sqlx::query_as(
            r#"
            INSERT INTO shift_task (shift_name, checklist)
            VALUES ($1, $2)
            RETURNING id, shift_name, checklist, created_at
            "#,
        )
        .bind(&input.shift_name)
        .bind(&input.checklist)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get a shift task by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ShiftTaskId) -> Result<Option<ShiftTask>, RepositoryError> {
        let row: Option<ShiftTaskRow> = sqlx::query_as(
            r#"
            SELECT id, shift_name, checklist, created_at
            FROM shift_task
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// List all shift tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ShiftTask>, RepositoryError> {
        let rows: Vec<ShiftTaskRow> = sqlx::query_as(
            r#"
            SELECT id, shift_name, checklist, created_at
            FROM shift_task
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
