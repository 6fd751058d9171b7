//! Escalation decision: which verdicts need a human.

use tally_core::config::ValidationConfig;
use tally_core::models::{Signal, SignalKind};
use tally_core::score::Score;

/// Decide whether the answer needs human review, returning the reason.
///
/// Two triggers: majority vote and agreement disagreeing by more than the
/// configured gap (checked even when the combined confidence looks clear),
/// and combined confidence inside the uncertain band. Clearly high or
/// clearly low verdicts outside those conditions are never flagged.
pub fn flag_decision(
    signals: &[Signal],
    confidence: Score,
    config: &ValidationConfig,
) -> Option<String> {
    let find = |kind: SignalKind| {
        signals
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.score.value())
    };

    if let (Some(majority), Some(agreement)) =
        (find(SignalKind::MajorityVote), find(SignalKind::Agreement))
    {
        let gap = (majority - agreement).abs();
        if gap > config.disagreement_gap {
            return Some(format!(
                "Majority vote ({majority:.1}) and agreement ({agreement:.1}) disagree by {gap:.1} points"
            ));
        }
    }

    let c = confidence.value();
    if c >= config.uncertain_band_low && c <= config.uncertain_band_high {
        return Some(format!(
            "Confidence {:.1} falls in the uncertain band {:.0}-{:.0}",
            c, config.uncertain_band_low, config.uncertain_band_high
        ));
    }

    None
}
