//! Weighted combination of whichever signals are present.

use tally_core::config::ValidationConfig;
use tally_core::models::Signal;
use tally_core::score::Score;

/// Fold the present signals into one confidence score.
///
/// Weighted mean with weights renormalized over the signals actually
/// present, so the combination is monotonic: raising any individual signal
/// can never lower the result. An empty signal list yields the neutral
/// score.
pub fn combine(signals: &[Signal], config: &ValidationConfig) -> Score {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    for signal in signals {
        let weight = config.weight_for(signal.kind);
        if weight <= 0.0 {
            continue;
        }
        weighted += weight * signal.score.value();
        total_weight += weight;
    }

    if total_weight == 0.0 {
        Score::neutral()
    } else {
        Score::new(weighted / total_weight)
    }
}
