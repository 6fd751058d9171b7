use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::signal::SignalKind;
use crate::score::Score;

/// Append-only audit record of one validation signal applied to one answer.
/// Never updated or deleted: the trail of how a verdict was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub id: i64,
    pub answer_id: String,
    pub signal_type: SignalKind,
    pub confidence_score: Score,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
