use serde::{Deserialize, Serialize};

use crate::models::signal::{Signal, SignalKind};
use crate::score::Score;

/// Result of multi-layer validation for one answer.
///
/// `signals` contains exactly the signals that were actually computed —
/// a signal that was unavailable (no siblings for majority vote, no model
/// reachable) is simply absent, never zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub confidence_score: Score,
    pub should_flag: bool,
    pub flag_reason: Option<String>,
    pub signals: Vec<Signal>,
}

impl ValidationOutcome {
    /// Find a signal of the given kind, if it was computed.
    pub fn signal(&self, kind: SignalKind) -> Option<&Signal> {
        self.signals.iter().find(|s| s.kind == kind)
    }

    pub fn agreement_score(&self) -> Option<Score> {
        self.signal(SignalKind::Agreement).map(|s| s.score)
    }

    pub fn model_confidence_score(&self) -> Option<Score> {
        self.signal(SignalKind::ModelConfidence).map(|s| s.score)
    }
}
