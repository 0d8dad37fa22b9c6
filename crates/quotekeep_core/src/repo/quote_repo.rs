//! Quote repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/list/search/delete APIs over the `quotes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - List and search results are ordered by `created_at DESC, id DESC`.
//! - Author search is a case-sensitive literal substring match.
//! - Deleting a missing id reports `false` instead of failing.
//! - Read paths reject rows that cannot be decoded instead of masking them.

use crate::db::DbError;
use crate::model::quote::{NewQuote, Quote, QuoteId};
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUOTE_SELECT_SQL: &str = "SELECT
    id,
    author,
    text,
    created_at
FROM quotes";

const QUOTE_ORDER_SQL: &str = "ORDER BY created_at DESC, id DESC";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for quote persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted quote data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for quote operations.
pub trait QuoteRepository {
    /// Persists a new quote and returns its freshly assigned id.
    fn insert_quote(&self, quote: &NewQuote) -> RepoResult<QuoteId>;
    /// Returns every quote, most recently saved first.
    fn list_quotes(&self) -> RepoResult<Vec<Quote>>;
    /// Returns quotes whose author contains `fragment`, most recent first.
    fn find_by_author_substring(&self, fragment: &str) -> RepoResult<Vec<Quote>>;
    /// Removes one quote. Returns whether a row was removed.
    fn delete_quote(&self, id: QuoteId) -> RepoResult<bool>;
}

/// SQLite-backed quote repository.
pub struct SqliteQuoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_quotes(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Vec<Quote>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut quotes = Vec::new();

        while let Some(row) = rows.next()? {
            quotes.push(parse_quote_row(row)?);
        }

        Ok(quotes)
    }
}

impl QuoteRepository for SqliteQuoteRepository<'_> {
    fn insert_quote(&self, quote: &NewQuote) -> RepoResult<QuoteId> {
        self.conn.execute(
            "INSERT INTO quotes (author, text, created_at) VALUES (?1, ?2, ?3);",
            params![quote.author.as_str(), quote.text.as_str(), quote.created_at],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=quote_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn list_quotes(&self) -> RepoResult<Vec<Quote>> {
        let quotes = self.query_quotes(&format!("{QUOTE_SELECT_SQL} {QUOTE_ORDER_SQL};"), [])?;
        debug!(
            "event=quote_list module=repo status=ok count={}",
            quotes.len()
        );
        Ok(quotes)
    }

    fn find_by_author_substring(&self, fragment: &str) -> RepoResult<Vec<Quote>> {
        // instr() keeps `%` and `_` literal and is case-sensitive, unlike LIKE.
        let quotes = self.query_quotes(
            &format!("{QUOTE_SELECT_SQL} WHERE instr(author, ?1) > 0 {QUOTE_ORDER_SQL};"),
            [fragment],
        )?;
        debug!(
            "event=quote_search module=repo status=ok count={}",
            quotes.len()
        );
        Ok(quotes)
    }

    fn delete_quote(&self, id: QuoteId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM quotes WHERE id = ?1;", [id])?;

        if changed == 0 {
            debug!("event=quote_delete module=repo status=noop id={id}");
            return Ok(false);
        }

        info!("event=quote_delete module=repo status=ok id={id}");
        Ok(true)
    }
}

fn parse_quote_row(row: &Row<'_>) -> RepoResult<Quote> {
    let id: QuoteId = row.get("id")?;
    let author: Option<String> = row.get("author")?;
    let text: Option<String> = row.get("text")?;

    let author = author
        .ok_or_else(|| RepoError::InvalidData(format!("missing author for quote id {id}")))?;
    let text =
        text.ok_or_else(|| RepoError::InvalidData(format!("missing text for quote id {id}")))?;

    Ok(Quote {
        id,
        author,
        text,
        created_at: row.get("created_at")?,
    })
}
