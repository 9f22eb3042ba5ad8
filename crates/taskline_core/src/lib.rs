//! Core domain logic for Taskline.
//! This crate is the single source of truth for schedule business rules.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoDraft, TodoId, TodoStatus};
pub use repo::todo_repo::{MemoryTodoRepository, RepoError, RepoResult, TodoRepository};
pub use service::todo_service::{derive_status, CreateOutcome, DraftRejection, TodoService};
pub use store::{
    MemoryCollection, MemoryStore, RecordMeta, StoreError, StoreResult, StoredRecord,
};
