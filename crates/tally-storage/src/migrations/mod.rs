//! Versioned schema migrations driven by `PRAGMA user_version`.

mod v001_core_tables;
mod v002_validation_tables;
mod v003_review_tables;
mod v004_reward_tables;

use rusqlite::Connection;

use tally_core::errors::{StorageError, TallyError, TallyResult};

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 4;

/// Run all pending migrations in order.
pub fn run_migrations(conn: &Connection) -> TallyResult<()> {
    let mut version = current_version(conn)?;

    while version < SCHEMA_VERSION {
        let next = version + 1;
        apply(conn, next).map_err(|e| {
            TallyError::StorageError(StorageError::MigrationFailed {
                version: next,
                reason: e.to_string(),
            })
        })?;
        set_version(conn, next)?;
        tracing::info!(version = next, "applied schema migration");
        version = next;
    }

    Ok(())
}

fn apply(conn: &Connection, version: u32) -> TallyResult<()> {
    match version {
        1 => v001_core_tables::migrate(conn),
        2 => v002_validation_tables::migrate(conn),
        3 => v003_review_tables::migrate(conn),
        4 => v004_reward_tables::migrate(conn),
        _ => Err(TallyError::StorageError(StorageError::MigrationFailed {
            version,
            reason: "no such migration".to_string(),
        })),
    }
}

fn current_version(conn: &Connection) -> TallyResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_version(conn: &Connection, version: u32) -> TallyResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))
}
