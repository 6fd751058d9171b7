//! Trust score ledger: bounded reputation updates, every delta justified by
//! a Rating row, plus the access-tier projection.

use tracing::info;

use tally_core::config::TrustConfig;
use tally_core::errors::TallyResult;
use tally_core::models::AccessTier;
use tally_core::score::Score;
use tally_core::traits::ITrustStorage;

/// Applies outcome deltas to contributor trust scores.
///
/// Strictly additive per call — no hidden decay. The ledger itself is not
/// idempotent; the scoring pipeline's verdict claim guarantees at-most-once
/// invocation per answer.
pub struct TrustLedger {
    config: TrustConfig,
}

impl TrustLedger {
    pub fn new(config: TrustConfig) -> Self {
        Self { config }
    }

    /// Apply a scoring outcome to a contributor. The store clamps the new
    /// score to the [0, 100] bounds and writes the Rating atomically.
    pub fn apply_outcome<S: ITrustStorage + ?Sized>(
        &self,
        storage: &S,
        contributor_id: &str,
        question_id: &str,
        is_correct: bool,
        agreement: Score,
    ) -> TallyResult<Score> {
        let (delta, reason) = self.outcome_delta(is_correct, agreement);
        let new_score = storage.apply_trust_delta(contributor_id, question_id, delta, &reason)?;
        info!(
            contributor_id = %contributor_id,
            delta,
            new_trust = %new_score,
            "trust score updated"
        );
        Ok(new_score)
    }

    /// The signed delta and audit reason for one outcome.
    pub fn outcome_delta(&self, is_correct: bool, agreement: Score) -> (f64, String) {
        if is_correct {
            let mut delta = self.config.correct_bonus;
            if agreement.value() >= self.config.consensus_threshold {
                delta += self.config.consensus_bonus;
            }
            (
                delta,
                format!("Correct answer with {:.1}% consensus", agreement.value()),
            )
        } else {
            (
                -self.config.incorrect_penalty,
                format!("Incorrect answer with {:.1}% consensus", agreement.value()),
            )
        }
    }
}

impl Default for TrustLedger {
    fn default() -> Self {
        Self::new(TrustConfig::default())
    }
}

/// Access tier for a trust score. A pure read-side projection — the tier is
/// never stored, always recomputed.
pub fn tier_for(trust: Score, config: &TrustConfig) -> AccessTier {
    let t = trust.value();
    if t >= config.expert_tier_min {
        AccessTier::Expert
    } else if t >= config.advanced_tier_min {
        AccessTier::Advanced
    } else if t >= config.intermediate_tier_min {
        AccessTier::Intermediate
    } else {
        AccessTier::Beginner
    }
}
