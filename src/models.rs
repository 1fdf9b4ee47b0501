//! Frontend Models
//!
//! Todo items, their status, and the form draft.

use std::fmt;

use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generated unique identifier of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Progress of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TodoStatus {
    #[default]
    #[serde(rename = "none")]
    NotStarted,
    #[serde(rename = "doing")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

/// Status options as (value, label), in display order
pub const STATUS_OPTIONS: &[(TodoStatus, &str)] = &[
    (TodoStatus::NotStarted, "未着手"),
    (TodoStatus::InProgress, "進行中"),
    (TodoStatus::Done, "完了"),
];

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "none",
            TodoStatus::InProgress => "doing",
            TodoStatus::Done => "done",
        }
    }

    /// Unknown values fall back to `NotStarted`
    pub fn from_str(s: &str) -> Self {
        match s {
            "doing" => TodoStatus::InProgress,
            "done" => TodoStatus::Done,
            _ => TodoStatus::NotStarted,
        }
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` as produced by a date input, or empty
    pub due_date: String,
    pub status: TodoStatus,
}

impl Todo {
    /// Build an item from the draft's fields under the given id
    pub fn from_draft(id: TodoId, draft: &Draft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date.clone(),
            status: draft.status,
        }
    }
}

/// Working copy of a todo item held by the form
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: TodoStatus,
}

impl Draft {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

impl From<&Todo> for Draft {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date.clone(),
            status: todo.status,
        }
    }
}

/// Form fields a draft edit can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    DueDate,
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_values() {
        for (status, _) in STATUS_OPTIONS {
            assert_eq!(TodoStatus::from_str(status.as_str()), *status);
        }
        assert_eq!(TodoStatus::from_str("bogus"), TodoStatus::NotStarted);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"doing\"");
        let parsed: TodoStatus = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, TodoStatus::NotStarted);
    }

    #[test]
    fn test_status_options_order() {
        let values: Vec<_> = STATUS_OPTIONS.iter().map(|(status, _)| status.as_str()).collect();
        assert_eq!(values, ["none", "doing", "done"]);
        assert_eq!(STATUS_OPTIONS[0].0, TodoStatus::default());
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = TodoId::new();
        let b = TodoId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36);
    }

    #[test]
    fn test_draft_from_todo() {
        let todo = Todo {
            id: TodoId::new(),
            title: "Write report".to_string(),
            description: "Q3 numbers".to_string(),
            due_date: "2026-11-01".to_string(),
            status: TodoStatus::InProgress,
        };
        let draft = Draft::from(&todo);
        assert_eq!(Todo::from_draft(todo.id, &draft), todo);
        assert!(draft.has_title());
        assert!(!Draft::default().has_title());
    }
}
