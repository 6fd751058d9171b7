//! Majority-vote signal: does the candidate match the single most common
//! sibling answer. Only meaningful for closed-form question types.

use std::collections::HashMap;

use tally_core::models::{QuestionType, Signal, SignalKind};
use tally_core::score::Score;

use crate::normalize::normalize;

/// Compute the majority-vote signal, or `None` when it does not apply
/// (free-form question, or no siblings to vote).
pub fn signal(candidate: &str, siblings: &[String], question_type: QuestionType) -> Option<Signal> {
    if !question_type.is_closed_form() || siblings.is_empty() {
        return None;
    }

    let mut tally: HashMap<String, usize> = HashMap::new();
    for sibling in siblings {
        *tally.entry(normalize(sibling)).or_default() += 1;
    }

    // Ties break lexicographically so the mode is deterministic.
    let (mode, count) = tally
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(text, count)| (text.clone(), *count))?;

    let matches_mode = normalize(candidate) == mode;
    let score = if matches_mode { Score::max() } else { Score::new(0.0) };

    let metadata = serde_json::json!({
        "majority_share": count as f64 / siblings.len() as f64,
        "distinct_answers": tally.len(),
        "sibling_count": siblings.len(),
    });

    Some(Signal::with_metadata(
        SignalKind::MajorityVote,
        score,
        metadata,
    ))
}
