//! Todo use-case service.
//!
//! # Responsibility
//! - Validate drafts before anything touches persistence.
//! - Derive schedule status and generate ids for accepted drafts.
//! - Shape listed todos for display.
//!
//! # Invariants
//! - A rejected draft never reaches the repository.
//! - Id generation happens here and nowhere else.
//! - Store failures pass through uninterpreted.

use crate::model::todo::{Todo, TodoDraft, TodoStatus};
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed rejection message. Callers learn that a draft was invalid, not
/// which field failed.
const INVALID_DATA: &str = "invalid data";

/// Outcome of a create call.
///
/// Validation failures are ordinary values, not errors, so callers handle
/// them exhaustively; only store faults travel in the outer `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Todo),
    Rejected(DraftRejection),
}

/// Structured rejection carrying the offending draft unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRejection {
    pub message: String,
    pub data: TodoDraft,
}

impl DraftRejection {
    fn invalid_data(data: TodoDraft) -> Self {
        Self {
            message: INVALID_DATA.to_string(),
            data,
        }
    }
}

/// Use-case service wrapper over a todo repository.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored todo with display shaping applied.
    ///
    /// # Contract
    /// - Calls the repository exactly once.
    /// - Upper-cases `text`; `when`, `status` and `id` are untouched.
    /// - Preserves repository order and count.
    pub fn list(&self) -> RepoResult<Vec<Todo>> {
        let todos = self.repo.list()?;
        Ok(todos
            .into_iter()
            .map(|todo| Todo {
                text: todo.text.to_uppercase(),
                ..todo
            })
            .collect())
    }

    /// Validates and persists a draft against the current wall clock.
    pub fn create(&self, draft: TodoDraft) -> RepoResult<CreateOutcome> {
        self.create_at(draft, Utc::now())
    }

    /// Validates and persists a draft against an explicit `now`.
    ///
    /// # Contract
    /// - Validation is local and runs before any repository call; a
    ///   rejection echoes the draft back unchanged under the fixed
    ///   `invalid data` message.
    /// - On success the enriched record gets a fresh v4 id and a status
    ///   derived from `when` vs `now`, and whatever the repository
    ///   resolves with is returned as-is.
    pub fn create_at(&self, draft: TodoDraft, now: DateTime<Utc>) -> RepoResult<CreateOutcome> {
        let validated = validate(&draft);
        let Some((text, when)) = validated else {
            debug!("event=todo_rejected module=service status=rejected");
            return Ok(CreateOutcome::Rejected(DraftRejection::invalid_data(draft)));
        };

        let record = Todo {
            id: Uuid::new_v4(),
            text,
            when,
            status: derive_status(when, now),
        };

        let created = self.repo.create(record)?;
        Ok(CreateOutcome::Created(created))
    }
}

/// Static draft validation: no I/O, no repository calls.
///
/// Returns the owned text plus the parsed due date, or `None` when either
/// field is missing or invalid.
fn validate(draft: &TodoDraft) -> Option<(String, DateTime<Utc>)> {
    let text = draft.text.as_deref().filter(|text| !text.is_empty())?;
    let when = draft.when.as_deref().and_then(parse_when)?;
    Some((text.to_string(), when))
}

/// Maps a due date to its schedule status relative to `now`.
///
/// Polarity is part of the product contract: a due date already behind
/// `now` is `Late`; a due date at or ahead of `now` is `Pending`.
pub fn derive_status(when: DateTime<Utc>, now: DateTime<Utc>) -> TodoStatus {
    if when < now {
        TodoStatus::Late
    } else {
        TodoStatus::Pending
    }
}

/// Parses raw due-date text into a UTC instant.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`; naive
/// forms are taken as UTC. Anything else is invalid.
fn parse_when(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
