use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust ledger configuration: outcome deltas and tier boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Delta for a correct answer.
    pub correct_bonus: f64,
    /// Extra delta when agreement is at or above `consensus_threshold`.
    pub consensus_bonus: f64,
    /// Agreement score qualifying for the consensus bonus.
    pub consensus_threshold: f64,
    /// Delta magnitude subtracted for an incorrect answer.
    pub incorrect_penalty: f64,
    /// Trust score at which the intermediate tier begins.
    pub intermediate_tier_min: f64,
    /// Trust score at which the advanced tier begins.
    pub advanced_tier_min: f64,
    /// Trust score at which the expert tier begins.
    pub expert_tier_min: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            correct_bonus: defaults::DEFAULT_CORRECT_BONUS,
            consensus_bonus: defaults::DEFAULT_CONSENSUS_BONUS,
            consensus_threshold: defaults::DEFAULT_CONSENSUS_THRESHOLD,
            incorrect_penalty: defaults::DEFAULT_INCORRECT_PENALTY,
            intermediate_tier_min: defaults::DEFAULT_INTERMEDIATE_TIER_MIN,
            advanced_tier_min: defaults::DEFAULT_ADVANCED_TIER_MIN,
            expert_tier_min: defaults::DEFAULT_EXPERT_TIER_MIN,
        }
    }
}
