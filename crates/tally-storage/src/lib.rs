//! # tally-storage
//!
//! SQLite persistence for the answer quality pipeline: connection pool,
//! versioned migrations, per-concern query modules, and the `StorageEngine`
//! implementing the core storage traits.
//!
//! The write paths the pipeline's invariants depend on are all single
//! conditional updates: verdict claim (`WHERE is_valid IS NULL`), flag
//! resolution (`WHERE status = 'pending'`), and the clamped trust update.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use tally_core::errors::{StorageError, TallyError};

/// Wrap a raw SQLite failure message into the pipeline error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> TallyError {
    TallyError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}
