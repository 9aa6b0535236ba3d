//! Task repository for database operations
//!
//! Every statement binds its values positionally; nothing user-supplied is
//! ever formatted into SQL text.

use crate::db::connection::DatabasePool;
use crate::db::error::StoreResult;
use crate::db::models::{NewTask, Task, TaskChanges};

const TASK_COLUMNS: &str = r#"id, task, "dueDate", remarks, status, priority, "createdAt""#;

/// Task repository for managing task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a task and return the stored row
    ///
    /// `createdAt` is taken from the database clock, `id` from the identity
    /// column.
    pub async fn create(pool: &DatabasePool, new_task: &NewTask) -> StoreResult<Task> {
        let sql = format!(
            r#"INSERT INTO "Tasks" (task, "dueDate", remarks, status, priority, "createdAt")
               VALUES ($1, $2, $3, $4, $5, now())
               RETURNING {}"#,
            TASK_COLUMNS
        );

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(&new_task.task)
            .bind(new_task.due_date)
            .bind(&new_task.remarks)
            .bind(&new_task.status)
            .bind(&new_task.priority)
            .fetch_one(pool)
            .await?;

        Ok(task)
    }

    /// Get a task by ID
    ///
    /// # Returns
    /// Task if found, None if not found, or store error
    pub async fn get_by_id(pool: &DatabasePool, id: i32) -> StoreResult<Option<Task>> {
        let sql = format!(r#"SELECT {} FROM "Tasks" WHERE id = $1"#, TASK_COLUMNS);

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(task)
    }

    /// Get all tasks in whatever order the database returns them
    pub async fn list(pool: &DatabasePool) -> StoreResult<Vec<Task>> {
        let sql = format!(r#"SELECT {} FROM "Tasks""#, TASK_COLUMNS);

        let tasks = sqlx::query_as::<_, Task>(&sql).fetch_all(pool).await?;
        Ok(tasks)
    }

    /// Overwrite every mutable column of a task
    ///
    /// # Returns
    /// Number of rows changed: 0 when no task has this ID
    pub async fn update(pool: &DatabasePool, id: i32, changes: &TaskChanges) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"UPDATE "Tasks"
               SET task = $1,
                   "dueDate" = $2,
                   remarks = $3,
                   status = $4,
                   priority = $5
               WHERE id = $6"#,
        )
        .bind(&changes.task)
        .bind(changes.due_date)
        .bind(&changes.remarks)
        .bind(&changes.status)
        .bind(&changes.priority)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a task
    ///
    /// # Returns
    /// Number of rows removed: 0 when no task has this ID
    pub async fn delete(pool: &DatabasePool, id: i32) -> StoreResult<u64> {
        let result = sqlx::query(r#"DELETE FROM "Tasks" WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
