//! Frontend Models
//!
//! Records persisted by the to-do widget.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One to-do entry.
///
/// Identity is positional: a task is addressed by its index in the list it
/// was loaded from, and that index is only valid until the next mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Creation instant in Unix milliseconds. Informational only.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub created: i64,
}

/// Accept whatever timestamp an older page wrote: floats are truncated,
/// anything else (null, strings, objects) reads as 0.
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Int(i64),
        Float(f64),
        Other(IgnoredAny),
    }

    Ok(match Millis::deserialize(deserializer)? {
        Millis::Int(ms) => ms,
        Millis::Float(ms) if ms.is_finite() => ms as i64,
        Millis::Float(_) | Millis::Other(_) => 0,
    })
}

impl Task {
    /// Create an uncompleted task stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            created: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// The full ordered collection, the unit of persistence.
pub type TaskList = Vec<Task>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(task.created > 0);
    }

    #[test]
    fn test_missing_fields_default() {
        let task: Task = serde_json::from_str(r#"{"text":"Old"}"#).unwrap();
        assert_eq!(task.text, "Old");
        assert!(!task.completed);
        assert_eq!(task.created, 0);
    }

    #[test]
    fn test_odd_created_values_keep_the_task() {
        let tasks: TaskList = serde_json::from_str(
            r#"[
                {"text":"Null","completed":true,"created":null},
                {"text":"Float","created":1700000000000.7},
                {"text":"String","created":"yesterday"},
                {"text":"Int","created":1700000000000}
            ]"#,
        )
        .unwrap();

        let created: Vec<i64> = tasks.iter().map(|t| t.created).collect();
        assert_eq!(created, vec![0, 1_700_000_000_000, 0, 1_700_000_000_000]);
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_wire_field_names() {
        let task = Task { text: "A".to_string(), completed: true, created: 5 };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"A","completed":true,"created":5}"#);
    }
}
