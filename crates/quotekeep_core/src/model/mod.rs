//! Domain model for saved quotations.
//!
//! # Responsibility
//! - Define the record persisted by the quote store.
//! - Keep timestamp conversion in one place.
//!
//! # Invariants
//! - Every persisted quote is identified by a store-assigned `QuoteId`.
//! - Deletion is a hard delete; ids are never handed out twice.

pub mod quote;
