//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep validation and status policy out of persistence code.

pub mod todo_service;
