//! Todo repository contract and collection-store adapter.
//!
//! # Responsibility
//! - Provide the persistence seam between domain values and store records.
//! - Strip store bookkeeping before anything crosses back to callers.
//!
//! # Invariants
//! - No validation and no id/status generation happen here; records arrive
//!   fully precomputed from the service.
//! - Store failures propagate unchanged.

use crate::model::todo::Todo;
use crate::store::{MemoryCollection, MemoryStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SCHEDULE_COLLECTION: &str = "schedule";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for todo persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for todo persistence.
///
/// The service depends on this seam instead of on a concrete store, so any
/// storage backend (or a test double) can stand in.
pub trait TodoRepository {
    /// Returns every persisted todo in store iteration order.
    fn list(&self) -> RepoResult<Vec<Todo>>;

    /// Persists one precomputed record and returns the stored todo.
    fn create(&self, record: Todo) -> RepoResult<Todo>;
}

/// Collection-store backed todo repository.
pub struct MemoryTodoRepository {
    schedule: MemoryCollection<Todo>,
}

impl MemoryTodoRepository {
    /// Opens the schedule collection on the injected store.
    ///
    /// The store's lifecycle stays with the composition root; repositories
    /// built on the same store share the same schedule records.
    pub fn new(store: &MemoryStore) -> RepoResult<Self> {
        let schedule = store.collection::<Todo>(SCHEDULE_COLLECTION)?;
        Ok(Self { schedule })
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn list(&self) -> RepoResult<Vec<Todo>> {
        let records = self.schedule.find()?;
        Ok(records.into_iter().map(|record| record.data).collect())
    }

    fn create(&self, record: Todo) -> RepoResult<Todo> {
        let stored = self.schedule.insert_one(record)?;
        Ok(stored.data)
    }
}
