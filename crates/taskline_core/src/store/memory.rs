//! In-memory collection store.
//!
//! # Responsibility
//! - Provide named, append-only record collections behind cheap handles.
//! - Decorate inserted records with sequence numbers and metadata.
//!
//! # Invariants
//! - `find` returns records in insertion order.
//! - Handles obtained for the same name share the same records.
//! - Failures surface as `StoreError::Unavailable`, never as panics.

use super::{RecordMeta, StoreError, StoreResult, StoredRecord};
use chrono::Utc;
use log::info;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-wide in-memory document store.
///
/// Constructed once by the composition root and handed to repository
/// constructors; collections are created lazily by name. No durability,
/// no indexing, no query language.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the named collection for record type `T`.
    ///
    /// # Errors
    /// - `Unavailable` when the collection registry lock is poisoned.
    /// - `Unavailable` when `name` is already bound to a different record
    ///   type.
    pub fn collection<T>(&self, name: &str) -> StoreResult<MemoryCollection<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable("collection registry lock poisoned".to_string()))?;

        let entry = collections
            .entry(name.to_string())
            .or_insert_with(|| {
                info!("event=collection_open module=store status=ok name={name}");
                Arc::new(Shared::<T>::default()) as Arc<dyn Any + Send + Sync>
            })
            .clone();

        let shared = entry.downcast::<Shared<T>>().map_err(|_| {
            StoreError::Unavailable(format!(
                "collection `{name}` is already open with a different record type"
            ))
        })?;

        Ok(MemoryCollection {
            name: name.to_string(),
            shared,
        })
    }
}

struct Shared<T> {
    inner: Mutex<Inner<T>>,
}

struct Inner<T> {
    next_seq: u64,
    records: Vec<StoredRecord<T>>,
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_seq: 1,
                records: Vec::new(),
            }),
        }
    }
}

/// Handle to one named collection; clones share the same records.
#[derive(Clone)]
pub struct MemoryCollection<T> {
    name: String,
    shared: Arc<Shared<T>>,
}

impl<T> std::fmt::Debug for MemoryCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCollection")
            .field("name", &self.name)
            .finish()
    }
}

impl<T: Clone> MemoryCollection<T> {
    /// Collection name as registered in the store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all stored records in insertion order.
    pub fn find(&self) -> StoreResult<Vec<StoredRecord<T>>> {
        let inner = self.lock()?;
        Ok(inner.records.clone())
    }

    /// Appends one record and echoes it back decorated with `seq`/`meta`.
    pub fn insert_one(&self, data: T) -> StoreResult<StoredRecord<T>> {
        let mut inner = self.lock()?;
        let record = StoredRecord {
            seq: inner.next_seq,
            meta: RecordMeta {
                created_epoch_ms: Utc::now().timestamp_millis(),
                revision: 0,
            },
            data,
        };
        inner.next_seq += 1;
        inner.records.push(record.clone());
        Ok(record)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner<T>>> {
        self.shared.inner.lock().map_err(|_| {
            StoreError::Unavailable(format!("collection `{}` lock poisoned", self.name))
        })
    }
}
