//! Slot payload codec for the task collection.
//!
//! # Responsibility
//! - Encode the full collection to the durable slot payload.
//! - Decode a payload back into typed tasks, rehydrating date fields.
//!
//! # Invariants
//! - The payload is a bare JSON array of task objects, field names as in the
//!   `Task` serde shape.
//! - Date fields travel as RFC 3339 text and decode back to `DateTime<Utc>`;
//!   a payload with malformed dates is rejected, not passed through as text.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload layout revision. The array-of-objects layout is fixed by the
/// external contract; bump only if the slot format itself changes.
pub const FORMAT_VERSION: u32 = 1;

pub type CodecResult<T> = Result<T, CodecError>;

/// Collection encode/decode failure.
#[derive(Debug)]
pub enum CodecError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "cannot encode task collection: {err}"),
            Self::Decode(err) => write!(f, "cannot decode task collection: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

/// Serializes the whole collection into one slot payload.
pub fn encode_tasks(tasks: &[Task]) -> CodecResult<String> {
    serde_json::to_string(tasks).map_err(CodecError::Encode)
}

/// Parses a slot payload back into typed tasks.
///
/// # Errors
/// - Returns `CodecError::Decode` for malformed JSON, unknown enum values,
///   or unparseable date text.
pub fn decode_tasks(payload: &str) -> CodecResult<Vec<Task>> {
    serde_json::from_str(payload).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{TaskDraft, TaskPriority, TaskStatus};
    use chrono::{TimeZone, Utc};

    fn sample_task() -> Task {
        TaskDraft {
            title: "file taxes".to_string(),
            description: "federal and state".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: Utc.timestamp_opt(1_713_000_000, 0).single().unwrap(),
        }
        .into_task(3, Utc.timestamp_opt(1_700_000_000, 0).single().unwrap())
    }

    #[test]
    fn encode_uses_expected_wire_fields() {
        let payload = encode_tasks(&[sample_task()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["title"], "file taxes");
        assert_eq!(value[0]["status"], "in-progress");
        assert_eq!(value[0]["priority"], "high");
        assert!(value[0]["dueDate"].is_string());
        assert!(value[0]["createdAt"].is_string());
        assert!(value[0]["updatedAt"].is_string());
    }

    #[test]
    fn decode_rehydrates_dates_to_typed_values() {
        let payload = encode_tasks(&[sample_task()]).unwrap();
        let decoded = decode_tasks(&payload).unwrap();

        assert_eq!(decoded, vec![sample_task()]);
        assert_eq!(
            decoded[0].due_date,
            Utc.timestamp_opt(1_713_000_000, 0).single().unwrap()
        );
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        assert!(decode_tasks("not json at all").is_err());
        assert!(decode_tasks("{\"id\":1}").is_err());
    }

    #[test]
    fn decode_rejects_malformed_date_text() {
        let payload = r#"[{
            "id": 1,
            "title": "x",
            "description": "",
            "status": "pending",
            "priority": "low",
            "dueDate": "tomorrow-ish",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }]"#;

        assert!(matches!(
            decode_tasks(payload),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn empty_collection_roundtrips() {
        let payload = encode_tasks(&[]).unwrap();
        assert_eq!(payload, "[]");
        assert_eq!(decode_tasks(&payload).unwrap(), Vec::<Task>::new());
    }
}
