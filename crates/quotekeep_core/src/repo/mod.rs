//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from workflow orchestration.
//!
//! # Invariants
//! - Repository APIs report missing rows as values (`Ok(false)`) and keep
//!   errors for transport and decoding failures.

pub mod quote_repo;
