//! Task record, draft and patch types.
//!
//! # Responsibility
//! - Define the persisted task shape shared by the store and the slot codec.
//! - Provide draft/patch inputs for create and update operations.
//!
//! # Invariants
//! - Wire field names are camelCase (`dueDate`, `createdAt`, `updatedAt`).
//! - Date fields serialize as RFC 3339 text and decode back to `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier, unique within the current collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u32;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Pending,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Completed,
}

impl TaskStatus {
    /// Returns the wire/display form (`pending | in-progress | completed`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

/// Relative urgency used by list views for sorting and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Returns the wire/display form (`low | medium | high`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Canonical persisted task record.
///
/// The serde shape is the durable slot format; renaming a field here is a
/// storage format change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned id, unique within the collection.
    pub id: TaskId,
    /// Short summary. Required in meaning; the core does not validate it.
    pub title: String,
    /// Free-form detail text. Empty means absent.
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// When the task is due.
    pub due_date: DateTime<Utc>,
    /// Set once at creation, never altered afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every mutation of this task.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for task creation.
///
/// The store owns `id`, `created_at` and `updated_at`; drafts cannot carry
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: DateTime<Utc>,
}

impl TaskDraft {
    /// Materializes the draft into a full task record.
    ///
    /// # Contract
    /// - `created_at` and `updated_at` are both set to `stamp`.
    pub fn into_task(self, id: TaskId, stamp: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            created_at: stamp,
            updated_at: stamp,
        }
    }
}

/// Partial field overrides for task updates.
///
/// Merge semantics: supplied fields replace the current value, absent fields
/// keep it. `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Applies the patch to `task` and advances `updated_at` to `stamp`.
    ///
    /// # Invariants
    /// - `task.id` and `task.created_at` are left untouched.
    pub fn apply_to(self, task: &mut Task, stamp: DateTime<Utc>) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        task.updated_at = stamp;
    }
}
