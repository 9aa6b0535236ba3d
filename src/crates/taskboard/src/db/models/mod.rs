//! Database models
//!
//! The only persisted entity is [`Task`]. Timestamps are `TIMESTAMPTZ` columns
//! decoded into `chrono::DateTime<Utc>`.

pub mod task;

pub use task::{NewTask, Task, TaskChanges};
