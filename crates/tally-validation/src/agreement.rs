//! Agreement scoring: how closely one answer matches the central tendency
//! of its sibling answers.

use tally_core::models::QuestionType;
use tally_core::score::Score;

use crate::normalize::{normalize, token_set};

/// Score a candidate answer against its siblings.
///
/// Pure function of its inputs, safe to re-run. The candidate must not be
/// in `siblings` — the caller excludes it by id. Zero siblings yields the
/// neutral score: an answer cannot be judged relative to nobody, and the
/// first answer to a question must not block.
///
/// Closed-form questions use the exact-match ratio over normalized text;
/// free-form questions use mean pairwise token-set similarity, so
/// near-duplicates score high rather than being held to binary equality.
pub fn score(candidate: &str, siblings: &[String], question_type: QuestionType) -> Score {
    if siblings.is_empty() {
        return Score::neutral();
    }

    let raw = if question_type.is_closed_form() {
        exact_match_ratio(candidate, siblings)
    } else {
        mean_pairwise_similarity(candidate, siblings)
    };

    Score::new(raw * 100.0)
}

/// Fraction of siblings whose normalized text equals the candidate's.
fn exact_match_ratio(candidate: &str, siblings: &[String]) -> f64 {
    let cand = normalize(candidate);
    let matches = siblings
        .iter()
        .filter(|s| normalize(s) == cand)
        .count();
    matches as f64 / siblings.len() as f64
}

/// Mean Dice similarity between the candidate's token set and each sibling's.
fn mean_pairwise_similarity(candidate: &str, siblings: &[String]) -> f64 {
    let cand = token_set(candidate);
    let total: f64 = siblings.iter().map(|s| dice(&cand, &token_set(s))).sum();
    total / siblings.len() as f64
}

fn dice(a: &std::collections::HashSet<String>, b: &std::collections::HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let overlap = a.intersection(b).count();
    2.0 * overlap as f64 / (a.len() + b.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_siblings_is_neutral() {
        let s = score("anything", &[], QuestionType::FreeText);
        assert_eq!(s.value(), Score::NEUTRAL);
    }

    #[test]
    fn near_duplicates_score_high_on_free_text() {
        let siblings = vec!["the capital is Paris".to_string()];
        let s = score("The capital is Paris!", &siblings, QuestionType::FreeText);
        assert!(s.value() > 95.0, "got {s}");
    }

    #[test]
    fn closed_form_uses_match_ratio() {
        let siblings = vec!["blue".to_string(), "Blue!".to_string(), "red".to_string()];
        let s = score("blue", &siblings, QuestionType::Choice);
        assert!((s.value() - 66.666).abs() < 0.1, "got {s}");
    }
}
