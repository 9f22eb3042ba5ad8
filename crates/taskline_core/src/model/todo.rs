//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the schedule collection.
//! - Define the loose draft shape accepted from callers before validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - A persisted `Todo` always carries valid values in all four fields.
//! - Drafts carry caller input verbatim; nothing is normalized here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every persisted todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Schedule state derived from the due date at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Due date was still at or ahead of the clock when the item was created.
    Pending,
    /// Due date had already passed when the item was created.
    Late,
}

/// Canonical persisted todo record.
///
/// Construction of valid instances goes through the service; this type
/// performs no validation of its own. Equality is structural, with `when`
/// compared by instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    /// Due date in UTC.
    pub when: DateTime<Utc>,
    pub status: TodoStatus,
}

impl Todo {
    /// Creates a fully-populated todo with a caller-provided stable ID.
    ///
    /// Used by persistence and test paths where identity already exists.
    pub fn with_id(
        id: TodoId,
        text: impl Into<String>,
        when: DateTime<Utc>,
        status: TodoStatus,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            when,
            status,
        }
    }
}

/// Raw creation input before service validation.
///
/// Any field may be absent. Rejected drafts are echoed back to the caller
/// unchanged, so the raw shapes are kept as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub text: Option<String>,
    /// Raw due-date text; parsed, never trusted, by the service.
    pub when: Option<String>,
}

impl TodoDraft {
    /// Convenience constructor for the common complete-draft case.
    pub fn new(text: impl Into<String>, when: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            when: Some(when.into()),
        }
    }
}
