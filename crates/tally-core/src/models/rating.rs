use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable audit row justifying one trust-score mutation.
/// Every delta the ledger applies writes exactly one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub contributor_id: String,
    pub question_id: String,
    /// Signed delta applied to the trust score (pre-clamp).
    pub rating_change: f64,
    /// Human-readable justification, e.g. "Correct answer with 92.0% consensus".
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
