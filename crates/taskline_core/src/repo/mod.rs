//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate collection-store details from service/business orchestration.
//!
//! # Invariants
//! - Repository outputs carry domain fields only; store bookkeeping never
//!   leaks past this layer.

pub mod todo_repo;
