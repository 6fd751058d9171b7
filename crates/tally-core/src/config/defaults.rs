//! Default values for all tunable pipeline constants.
//!
//! Thresholds, weights, bonuses, and penalties are configuration, not
//! business law baked into the algorithms.

pub const DEFAULT_CORRECTNESS_THRESHOLD: f64 = 60.0;
pub const DEFAULT_UNCERTAIN_BAND_LOW: f64 = 40.0;
pub const DEFAULT_UNCERTAIN_BAND_HIGH: f64 = 65.0;
pub const DEFAULT_DISAGREEMENT_GAP: f64 = 50.0;

pub const DEFAULT_MAJORITY_WEIGHT: f64 = 0.4;
pub const DEFAULT_AGREEMENT_WEIGHT: f64 = 0.4;
pub const DEFAULT_MODEL_CONFIDENCE_WEIGHT: f64 = 0.2;

pub const DEFAULT_CORRECT_BONUS: f64 = 2.0;
pub const DEFAULT_CONSENSUS_BONUS: f64 = 1.0;
pub const DEFAULT_CONSENSUS_THRESHOLD: f64 = 90.0;
pub const DEFAULT_INCORRECT_PENALTY: f64 = 5.0;

pub const DEFAULT_INTERMEDIATE_TIER_MIN: f64 = 40.0;
pub const DEFAULT_ADVANCED_TIER_MIN: f64 = 60.0;
pub const DEFAULT_EXPERT_TIER_MIN: f64 = 80.0;

pub const DEFAULT_BASE_REWARD: f64 = 10.0;
pub const DEFAULT_HIGH_CONSENSUS_BONUS: f64 = 5.0;
pub const DEFAULT_HIGH_CONSENSUS_THRESHOLD: f64 = 90.0;

pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 5;
