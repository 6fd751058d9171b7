//! The single write connection. All mutations are serialized through it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use tally_core::errors::{StorageError, TallyError, TallyResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded writer. SQLite allows one writer at a time; funneling all
/// writes through one connection avoids SQLITE_BUSY churn under WAL.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path) -> TallyResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> TallyResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the writer.
    pub fn with_conn_sync<F, T>(&self, f: F) -> TallyResult<T>
    where
        F: FnOnce(&Connection) -> TallyResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            TallyError::StorageError(StorageError::LockPoisoned {
                message: e.to_string(),
            })
        })?;
        f(&guard)
    }
}
