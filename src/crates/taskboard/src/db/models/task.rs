//! Task model for database persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `Tasks` table
///
/// Column and JSON names are both camelCase, so the same struct is read from
/// the store and written to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier
    pub id: i32,

    /// Free-text description, never empty
    pub task: String,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Optional free-text remarks
    pub remarks: Option<String>,

    /// Workflow status, e.g. "To Do"
    pub status: Option<String>,

    /// Priority label, e.g. "Medium"
    pub priority: Option<String>,

    /// Set by the store when the row is inserted
    pub created_at: DateTime<Utc>,
}

/// Values for a row about to be inserted, defaults already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub task: String,
    pub due_date: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    pub status: String,
    pub priority: String,
}

impl NewTask {
    /// Create an insert with the given description and status/priority
    pub fn new(
        task: impl Into<String>,
        status: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            due_date: None,
            remarks: None,
            status: status.into(),
            priority: priority.into(),
        }
    }

    /// Builder method to set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Builder method to set remarks
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

/// Replacement values for every mutable column of an existing row
///
/// `status` and `priority` carry no defaults here: `None` stores NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub task: String,
    pub due_date: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl TaskChanges {
    /// Overwrite the mutable fields of an in-memory task
    pub fn apply_to(&self, task: &mut Task) {
        task.task = self.task.clone();
        task.due_date = self.due_date;
        task.remarks = self.remarks.clone();
        task.status = self.status.clone();
        task.priority = self.priority.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task {
            id: 1,
            task: "Buy milk".to_string(),
            due_date: None,
            remarks: None,
            status: Some("To Do".to_string()),
            priority: Some("Medium".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let json = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["task"], "Buy milk");
        assert!(json["dueDate"].is_null());
        assert!(json["remarks"].is_null());
        assert_eq!(json["status"], "To Do");
        assert_eq!(json["priority"], "Medium");
        assert_eq!(json["createdAt"], "2024-05-01T08:00:00Z");
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn test_new_task_builders() {
        let due = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let new_task = NewTask::new("Write report", "To Do", "High")
            .with_due_date(due)
            .with_remarks("before Friday");

        assert_eq!(new_task.task, "Write report");
        assert_eq!(new_task.due_date, Some(due));
        assert_eq!(new_task.remarks.as_deref(), Some("before Friday"));
        assert_eq!(new_task.priority, "High");
    }

    #[test]
    fn test_changes_overwrite_every_mutable_field() {
        let mut task = sample_task();
        task.remarks = Some("old".to_string());
        let created_at = task.created_at;

        let changes = TaskChanges {
            task: "Buy oat milk".to_string(),
            due_date: None,
            remarks: None,
            status: Some("Done".to_string()),
            priority: None,
        };
        changes.apply_to(&mut task);

        assert_eq!(task.id, 1);
        assert_eq!(task.task, "Buy oat milk");
        assert_eq!(task.remarks, None);
        assert_eq!(task.status.as_deref(), Some("Done"));
        assert_eq!(task.priority, None);
        assert_eq!(task.created_at, created_at);
    }
}
