//! Interactive console workflows over the quote store.
//!
//! # Responsibility
//! - Compose repository calls with prompts, menus and confirmations.
//! - Render store contents for the console and for export files.
//!
//! # Invariants
//! - Invalid input is re-prompted, never defaulted.
//! - A workflow mutates the store with at most one repository call per
//!   confirmed user action; cancelled or invalid input leaves it untouched.
//! - Ordinal menus are rebuilt on every render and are only valid because the
//!   process is single-threaded.

use crate::db::DbError;
use crate::repo::quote_repo::RepoError;
use crate::source::FetchError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod console;
pub mod delete;
pub mod export;
pub mod list;
pub mod menu;
pub mod recover;
pub mod save;
pub mod search;

/// Width of the delimiter printed between records on the console.
pub const CONSOLE_DELIMITER_WIDTH: usize = 45;

/// Message shown when a workflow finds no quotes at all.
pub const EMPTY_STORE_MESSAGE: &str = "The database is empty.";

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Failure that ends a workflow.
///
/// Bad user input is not an error here: workflows recover from it locally.
#[derive(Debug)]
pub enum WorkflowError {
    Repo(RepoError),
    Db(DbError),
    Io(std::io::Error),
    Fetch(FetchError),
    /// Console input reached end-of-file while a prompt was waiting.
    InputClosed,
}

impl Display for WorkflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Fetch(err) => write!(f, "{err}"),
            Self::InputClosed => write!(f, "console input closed"),
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Fetch(err) => Some(err),
            Self::InputClosed => None,
        }
    }
}

impl From<RepoError> for WorkflowError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for WorkflowError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for WorkflowError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FetchError> for WorkflowError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

/// Returns a line of `width` dashes.
pub fn delimiter(width: usize) -> String {
    "-".repeat(width)
}

/// Parses a zero-based menu ordinal and checks it against `len` entries.
pub fn parse_ordinal(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|ordinal| *ordinal < len)
}
