//! Core domain logic for quotekeep.
//! This crate owns the quote store and every interactive workflow on top of it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod source;
pub mod store;
pub mod workflow;

pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::quote::{NewQuote, Quote, QuoteId};
pub use repo::quote_repo::{QuoteRepository, RepoError, RepoResult, SqliteQuoteRepository};
pub use source::{FetchError, FetchResult, QuoteSource};
pub use store::QuoteStore;
pub use workflow::console::{Console, StdConsole};
pub use workflow::save::SaveRequest;
pub use workflow::{WorkflowError, WorkflowResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
