//! Store client used by the HTTP layer
//!
//! Handlers talk to a [`TaskStore`] trait object rather than a pool, which
//! keeps the API testable without a running database.

use async_trait::async_trait;

use crate::db::connection::{DatabaseConnection, PoolStatistics};
use crate::db::error::StoreResult;
use crate::db::models::{NewTask, Task, TaskChanges};
use crate::db::repositories::TaskRepository;

/// CRUD operations on the `Tasks` table
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks, in store order
    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    /// One task, or `None` if the ID is unknown
    async fn get_task(&self, id: i32) -> StoreResult<Option<Task>>;

    /// Insert and return the stored row with its generated `id` and `createdAt`
    async fn create_task(&self, new_task: NewTask) -> StoreResult<Task>;

    /// Overwrite the mutable fields; returns rows affected (0 for an unknown ID)
    async fn update_task(&self, id: i32, changes: TaskChanges) -> StoreResult<u64>;

    /// Hard delete; returns rows affected (0 for an unknown ID)
    async fn delete_task(&self, id: i32) -> StoreResult<u64>;

    /// Cheap round trip proving the store is reachable
    async fn health_check(&self) -> StoreResult<()>;

    /// Connection pool usage, for stores backed by a pool
    fn pool_statistics(&self) -> Option<PoolStatistics> {
        None
    }
}

/// [`TaskStore`] backed by the PostgreSQL pool
#[derive(Clone, Debug)]
pub struct PgTaskStore {
    db: DatabaseConnection,
}

impl PgTaskStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Underlying connection, for lifecycle operations like `close`
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        TaskRepository::list(self.db.pool()).await
    }

    async fn get_task(&self, id: i32) -> StoreResult<Option<Task>> {
        TaskRepository::get_by_id(self.db.pool(), id).await
    }

    async fn create_task(&self, new_task: NewTask) -> StoreResult<Task> {
        TaskRepository::create(self.db.pool(), &new_task).await
    }

    async fn update_task(&self, id: i32, changes: TaskChanges) -> StoreResult<u64> {
        TaskRepository::update(self.db.pool(), id, &changes).await
    }

    async fn delete_task(&self, id: i32) -> StoreResult<u64> {
        TaskRepository::delete(self.db.pool(), id).await
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.db.health_check().await
    }

    fn pool_statistics(&self) -> Option<PoolStatistics> {
        Some(self.db.get_pool_statistics())
    }
}
