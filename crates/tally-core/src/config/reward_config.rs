use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::reward::RewardType;

/// Reward allocator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Value granted for any validated answer.
    pub base_reward: f64,
    /// Extra value when agreement is at or above `high_consensus_threshold`.
    pub high_consensus_bonus: f64,
    /// Agreement score qualifying for the high-consensus bonus.
    pub high_consensus_threshold: f64,
    /// The entitlement type recorded on new rewards.
    pub reward_type: RewardType,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base_reward: defaults::DEFAULT_BASE_REWARD,
            high_consensus_bonus: defaults::DEFAULT_HIGH_CONSENSUS_BONUS,
            high_consensus_threshold: defaults::DEFAULT_HIGH_CONSENSUS_THRESHOLD,
            reward_type: RewardType::Points,
        }
    }
}
