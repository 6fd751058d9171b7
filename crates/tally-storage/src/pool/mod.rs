//! One writer, several readers.
//!
//! Under WAL, SQLite takes a single writer at a time while readers proceed
//! unblocked, so every mutation funnels through one guarded connection and
//! reads fan out over a small round-robin pool.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use tally_core::errors::TallyResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The writer plus the read pool for one database.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
}

impl ConnectionPool {
    /// Open the writer and `read_pool_size` readers against a database file.
    pub fn open(path: &Path, read_pool_size: usize) -> TallyResult<Self> {
        Ok(Self {
            writer: WriteConnection::open(path)?,
            readers: ReadPool::open(path, read_pool_size)?,
        })
    }

    /// Open against a private in-memory database, for tests.
    ///
    /// Each in-memory connection is its own database, so the readers opened
    /// here never observe the writer's rows. Callers in this mode must send
    /// reads through the writer as well; the engine does exactly that.
    pub fn open_in_memory(read_pool_size: usize) -> TallyResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: ReadPool::open_in_memory(read_pool_size)?,
        })
    }
}
