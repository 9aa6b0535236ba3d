//! Shared helpers for the HTTP integration tests
//!
//! The router runs against [`MemoryTaskStore`] so no database is needed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use tempfile::TempDir;
use tower::ServiceExt;

use taskboard::api::{create_router, AppState};
use taskboard::config::TaskDefaults;
use taskboard::db::models::{NewTask, Task, TaskChanges};
use taskboard::db::{PoolStatistics, StoreError, StoreResult, TaskStore};

pub const INDEX_HTML: &str = "<!doctype html><title>Taskboard</title>";

/// In-memory [`TaskStore`] with a switch to make every call fail
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    next_id: Mutex<i32>,
    failing: AtomicBool,
    query_failing: AtomicBool,
    pool: Mutex<Option<PoolStatistics>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call return a connection error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make every subsequent call return a query error
    pub fn set_query_failing(&self, failing: bool) {
        self.query_failing.store(failing, Ordering::SeqCst);
    }

    /// Pool statistics reported to the health endpoint
    pub fn set_pool_statistics(&self, stats: PoolStatistics) {
        *self.pool.lock().unwrap() = Some(stats);
    }

    /// Snapshot of the stored rows
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        if self.query_failing.load(Ordering::SeqCst) {
            return Err(StoreError::Query("relation \"Tasks\" does not exist".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        self.check()?;
        Ok(self.tasks())
    }

    async fn get_task(&self, id: i32) -> StoreResult<Option<Task>> {
        self.check()?;
        Ok(self.tasks().into_iter().find(|t| t.id == id))
    }

    async fn create_task(&self, new_task: NewTask) -> StoreResult<Task> {
        self.check()?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        let task = Task {
            id,
            task: new_task.task,
            due_date: new_task.due_date,
            remarks: new_task.remarks,
            status: Some(new_task.status),
            priority: Some(new_task.priority),
            created_at: Utc::now(),
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: i32, changes: TaskChanges) -> StoreResult<u64> {
        self.check()?;
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                changes.apply_to(task);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_task(&self, id: i32) -> StoreResult<u64> {
        self.check()?;
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok((before - tasks.len()) as u64)
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.check()
    }

    fn pool_statistics(&self) -> Option<PoolStatistics> {
        self.pool.lock().unwrap().clone()
    }
}

/// Router plus the handles a test needs to inspect it
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryTaskStore>,
    // Keeps the static directory alive for the router's lifetime
    _static_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_defaults(TaskDefaults::default())
    }

    pub fn with_defaults(defaults: TaskDefaults) -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(static_dir.path().join("app.js"), "console.log('taskboard');").unwrap();

        let store = Arc::new(MemoryTaskStore::new());
        let app_state = AppState::new(store.clone(), defaults);
        let router = create_router(app_state, static_dir.path());

        Self {
            router,
            store,
            _static_dir: static_dir,
        }
    }

    /// Send a request and collect status plus body text
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::delete(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
        self.send(json_request(Method::PUT, uri, body)).await
    }
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn parse_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}
