//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//! - Refuse to adopt an unversioned database that already holds tables.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_quotes.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Outcome of inspecting a connection before migrating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    /// Fresh or partially migrated store that can be brought up to date.
    Pending { current: u32 },
    /// Already at the latest version.
    Current,
    /// Unversioned file that already holds tables this tool did not create.
    Foreign,
}

/// Inspects the schema version and table layout of a connection.
pub fn inspect_schema(conn: &Connection) -> DbResult<SchemaState> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(SchemaState::Current);
    }

    if current_version == 0 && has_user_tables(conn)? {
        return Ok(SchemaState::Foreign);
    }

    Ok(SchemaState::Pending {
        current: current_version,
    })
}

/// Applies all pending migrations on the provided connection.
///
/// Callers are expected to have rejected [`SchemaState::Foreign`] first.
pub fn apply_migrations(conn: &mut Connection, current_version: u32) -> DbResult<()> {
    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn has_user_tables(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        );",
        [],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
