//! Owned quote store with explicit lifecycle.
//!
//! # Responsibility
//! - Own the single SQLite connection for the process.
//! - Expose the repository contract on top of that connection.
//! - Make use-after-close an error instead of a panic.
//!
//! # Invariants
//! - `close` succeeds at most once; later calls and operations return
//!   `DbError::Closed`.
//! - Dropping the store releases the connection on every exit path.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::quote::{NewQuote, Quote, QuoteId};
use crate::repo::quote_repo::{QuoteRepository, RepoResult, SqliteQuoteRepository};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Durable collection of saved quotes backed by one SQLite file.
pub struct QuoteStore {
    conn: Option<Connection>,
    location: Option<PathBuf>,
}

impl QuoteStore {
    /// Opens or creates the store file at `path`.
    ///
    /// # Errors
    /// - `DbError::InvalidStoreFile` when the file is not a quotekeep store.
    /// - `DbError::UnsupportedSchemaVersion` when a newer binary wrote it.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        let conn = open_db(path)?;
        Ok(Self {
            conn: Some(conn),
            location: Some(path.to_path_buf()),
        })
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: Some(open_db_in_memory()?),
            location: None,
        })
    }

    /// File backing this store, `None` for in-memory stores.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Closes the underlying connection.
    pub fn close(&mut self) -> DbResult<()> {
        let conn = self.conn.take().ok_or(DbError::Closed)?;
        match conn.close() {
            Ok(()) => {
                info!("event=db_close module=store status=ok");
                Ok(())
            }
            Err((conn, err)) => {
                error!("event=db_close module=store status=error error={err}");
                // Keep the handle so a later close can retry.
                self.conn = Some(conn);
                Err(err.into())
            }
        }
    }

    fn repo(&self) -> RepoResult<SqliteQuoteRepository<'_>> {
        let conn = self.conn.as_ref().ok_or(DbError::Closed)?;
        Ok(SqliteQuoteRepository::new(conn))
    }
}

impl QuoteRepository for QuoteStore {
    fn insert_quote(&self, quote: &NewQuote) -> RepoResult<QuoteId> {
        self.repo()?.insert_quote(quote)
    }

    fn list_quotes(&self) -> RepoResult<Vec<Quote>> {
        self.repo()?.list_quotes()
    }

    fn find_by_author_substring(&self, fragment: &str) -> RepoResult<Vec<Quote>> {
        self.repo()?.find_by_author_substring(fragment)
    }

    fn delete_quote(&self, id: QuoteId) -> RepoResult<bool> {
        self.repo()?.delete_quote(id)
    }
}
