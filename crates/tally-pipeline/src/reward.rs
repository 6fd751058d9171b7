//! Reward allocation for validated answers.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use tally_core::config::RewardConfig;
use tally_core::errors::TallyResult;
use tally_core::models::{Reward, RewardStatus};
use tally_core::score::Score;
use tally_core::traits::IRewardStorage;

/// Decides whether, and how much, to reward a validated answer.
///
/// Only invoked for `is_valid = true` verdicts; the allocator records the
/// entitlement as `awarded` and leaves redemption to an external process.
/// Rewards are never clawed back, even if a later human review reverses
/// the verdict.
pub struct RewardAllocator {
    config: RewardConfig,
}

impl RewardAllocator {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    /// Build and persist the reward for one validated answer.
    pub fn allocate<S: IRewardStorage + ?Sized>(
        &self,
        storage: &S,
        contributor_id: &str,
        agreement: Score,
    ) -> TallyResult<Reward> {
        let reward = self.build(contributor_id, agreement);
        storage.insert_reward(&reward)?;
        info!(
            contributor_id = %contributor_id,
            value = reward.value,
            "reward allocated"
        );
        Ok(reward)
    }

    /// The reward a given agreement level earns.
    pub fn build(&self, contributor_id: &str, agreement: Score) -> Reward {
        let mut value = self.config.base_reward;
        if agreement.value() >= self.config.high_consensus_threshold {
            value += self.config.high_consensus_bonus;
        }
        Reward {
            id: Uuid::new_v4().to_string(),
            contributor_id: contributor_id.to_string(),
            reward_type: self.config.reward_type,
            value,
            status: RewardStatus::Awarded,
            created_at: Utc::now(),
        }
    }
}

impl Default for RewardAllocator {
    fn default() -> Self {
        Self::new(RewardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_consensus_earns_bonus() {
        let reward = RewardAllocator::default().build("c1", Score::new(95.0));
        assert_eq!(reward.value, 15.0);
        assert_eq!(reward.status, RewardStatus::Awarded);
    }

    #[test]
    fn ordinary_consensus_earns_base() {
        let reward = RewardAllocator::default().build("c1", Score::new(80.0));
        assert_eq!(reward.value, 10.0);
    }
}
