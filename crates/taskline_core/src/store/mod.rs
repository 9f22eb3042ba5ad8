//! Collection-store boundary types.
//!
//! # Responsibility
//! - Define the stored-record envelope shared by store backends.
//! - Define store-level transport errors.
//!
//! # Invariants
//! - `seq` and `meta` are store bookkeeping; they must never cross the
//!   repository boundary.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;

pub use memory::{MemoryCollection, MemoryStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure while talking to the collection store.
#[derive(Debug)]
pub enum StoreError {
    /// The store cannot be queried: poisoned lock, or a collection handle
    /// requested with an incompatible record type.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Store bookkeeping attached to every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Insertion wall-clock in unix epoch milliseconds.
    pub created_epoch_ms: i64,
    /// Mutation counter; stays 0 for append-only collections.
    pub revision: u32,
}

/// A record as kept by the store: domain payload plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord<T> {
    /// Store-assigned sequence number, unique within one collection.
    pub seq: u64,
    pub meta: RecordMeta,
    pub data: T,
}
