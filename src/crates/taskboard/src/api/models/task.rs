//! Task API models and DTOs

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::middleware::validation::{non_empty, validate_not_empty, EMPTY_TASK_MESSAGE};
use crate::config::TaskDefaults;
use crate::db::models::{NewTask, TaskChanges};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Body of a create or update request
///
/// Every field is optional at the JSON level; presence of `task` is checked
/// when the payload is converted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task text (required, non-empty)
    pub task: Option<String>,

    /// Due date: RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD`
    pub due_date: Option<String>,

    /// Free-text remarks
    pub remarks: Option<String>,

    /// Status label
    pub status: Option<String>,

    /// Priority label
    pub priority: Option<String>,
}

impl TaskPayload {
    /// Create a payload carrying only the task text
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            ..Self::default()
        }
    }

    /// Convert a create request, filling absent status and priority from `defaults`
    pub fn into_new_task(self, defaults: &TaskDefaults) -> ApiResult<NewTask> {
        let task = validate_not_empty(self.task, EMPTY_TASK_MESSAGE)?;
        let due_date = parse_due_date(self.due_date)?;

        Ok(NewTask {
            task,
            due_date,
            remarks: non_empty(self.remarks),
            status: non_empty(self.status).unwrap_or_else(|| defaults.status.clone()),
            priority: non_empty(self.priority).unwrap_or_else(|| defaults.priority.clone()),
        })
    }

    /// Convert an update request; status and priority are stored as given
    pub fn into_changes(self) -> ApiResult<TaskChanges> {
        let task = validate_not_empty(self.task, EMPTY_TASK_MESSAGE)?;
        let due_date = parse_due_date(self.due_date)?;

        Ok(TaskChanges {
            task,
            due_date,
            remarks: non_empty(self.remarks),
            status: self.status,
            priority: self.priority,
        })
    }
}

/// Parse a due date; absent or empty input means no due date
///
/// Values without an offset are read as UTC.
pub fn parse_due_date(raw: Option<String>) -> ApiResult<Option<DateTime<Utc>>> {
    let raw = match non_empty(raw) {
        Some(raw) => raw,
        None => return Ok(None),
    };
    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Some(Utc.from_utc_datetime(&naive)));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))));
    }

    Err(ApiError::Validation(format!("Invalid due date: {}", raw)))
}

/// Confirmation body for update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
