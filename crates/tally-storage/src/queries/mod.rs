//! Query logic per concern, as free functions over `&Connection`.

pub mod answer_crud;
pub mod answer_query;
pub mod review_ops;
pub mod reward_ops;
pub mod trust_ops;
pub mod validation_events;

use chrono::{DateTime, Utc};

/// Map a domain parse failure into a rusqlite conversion error, preserving
/// the column index.
pub(crate) fn conv_err<E>(idx: usize, e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

/// Parse an RFC 3339 timestamp stored as TEXT.
pub(crate) fn parse_ts(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| conv_err(idx, e))
}
