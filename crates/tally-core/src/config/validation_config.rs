use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::signal::SignalKind;

/// Multi-layer validator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Combined confidence at or above this is a correct verdict.
    pub correctness_threshold: f64,
    /// Lower edge of the uncertain band (inclusive).
    pub uncertain_band_low: f64,
    /// Upper edge of the uncertain band (inclusive).
    pub uncertain_band_high: f64,
    /// Majority vote and agreement disagreeing by more than this flags the
    /// answer for review, even when the combined confidence looks clear.
    pub disagreement_gap: f64,
    /// Combination weight for the majority-vote signal.
    pub majority_weight: f64,
    /// Combination weight for the agreement signal.
    pub agreement_weight: f64,
    /// Combination weight for the external model confidence signal.
    pub model_confidence_weight: f64,
}

impl ValidationConfig {
    /// Weight assigned to a signal kind in the combined confidence.
    /// Weights are renormalized over the signals actually present.
    pub fn weight_for(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::MajorityVote => self.majority_weight,
            SignalKind::Agreement => self.agreement_weight,
            SignalKind::ModelConfidence => self.model_confidence_weight,
            // Human review is authoritative; when present it is the verdict,
            // not a weighted input.
            SignalKind::HumanReview => 1.0,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            correctness_threshold: defaults::DEFAULT_CORRECTNESS_THRESHOLD,
            uncertain_band_low: defaults::DEFAULT_UNCERTAIN_BAND_LOW,
            uncertain_band_high: defaults::DEFAULT_UNCERTAIN_BAND_HIGH,
            disagreement_gap: defaults::DEFAULT_DISAGREEMENT_GAP,
            majority_weight: defaults::DEFAULT_MAJORITY_WEIGHT,
            agreement_weight: defaults::DEFAULT_AGREEMENT_WEIGHT,
            model_confidence_weight: defaults::DEFAULT_MODEL_CONFIDENCE_WEIGHT,
        }
    }
}
