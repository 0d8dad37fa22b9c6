//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `synchronous=FULL`, so every committed write is
//!   on disk before the call returns.
//! - Returned connections have migrations fully applied.
//! - Files that are not SQLite databases, or that carry a foreign `quotes`
//!   table, are reported as `InvalidStoreFile` and never modified.

use super::migrations::{apply_migrations, inspect_schema, SchemaState};
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, ErrorCode};
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and applies all pending migrations.
///
/// # Side effects
/// - Creates the file when it does not exist.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(classify_open_error(err.into(), path));
        }
    };

    match bootstrap_connection(&mut conn).map_err(|err| classify_open_error(err, path)) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            let error_code = if err.is_invalid_store_file() {
                "db_invalid_file"
            } else {
                "db_bootstrap_failed"
            };
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                error_code,
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let mut conn = Connection::open_in_memory()?;
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch("PRAGMA synchronous = FULL;")?;

    match inspect_schema(conn)? {
        SchemaState::Current => Ok(()),
        SchemaState::Pending { current } => apply_migrations(conn, current),
        // Path is filled in by the caller, which knows where the file lives.
        SchemaState::Foreign => Err(DbError::InvalidStoreFile {
            path: Default::default(),
        }),
    }
}

fn classify_open_error(err: DbError, path: &Path) -> DbError {
    match err {
        DbError::Sqlite(rusqlite::Error::SqliteFailure(inner, _))
            if matches!(
                inner.code,
                ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt
            ) =>
        {
            DbError::InvalidStoreFile {
                path: path.to_path_buf(),
            }
        }
        DbError::InvalidStoreFile { .. } => DbError::InvalidStoreFile {
            path: path.to_path_buf(),
        },
        other => other,
    }
}
