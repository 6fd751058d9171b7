//! End-to-end validator scenarios over the full signal stack.

use tally_core::config::ValidationConfig;
use tally_core::models::{QuestionType, SignalKind};
use tally_core::score::Score;
use tally_validation::Validator;

fn siblings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn unanimous_choice_is_valid_and_unflagged() {
    let validator = Validator::default();
    let sibs = siblings(&["blue", "Blue", "blue!", "BLUE"]);
    let outcome = validator.validate("blue", &sibs, QuestionType::Choice, None, None);

    assert!(outcome.is_valid);
    assert_eq!(outcome.confidence_score.value(), 100.0);
    assert!(!outcome.should_flag);
    assert!(outcome.flag_reason.is_none());
    // Agreement and majority computed, model absent.
    assert_eq!(outcome.signals.len(), 2);
    assert!(outcome.signal(SignalKind::ModelConfidence).is_none());
}

#[test]
fn first_answer_scores_neutral_and_lands_in_the_band() {
    let validator = Validator::default();
    let outcome = validator.validate("anything", &[], QuestionType::FreeText, None, None);

    // Neutral 50 is below the 60 threshold and inside the 40-65 band.
    assert!(!outcome.is_valid);
    assert_eq!(outcome.confidence_score.value(), 50.0);
    assert!(outcome.should_flag);
    assert!(outcome.flag_reason.unwrap().contains("uncertain band"));
}

#[test]
fn rating_outlier_pattern_flags_on_disagreement() {
    let validator = Validator::default();
    // Candidate matches the mode, but only 2 of 5 siblings.
    let sibs = siblings(&["4", "5", "6", "7", "4"]);
    let outcome = validator.validate("4", &sibs, QuestionType::Rating, None, None);

    // agreement 40, majority 100: combined (40*0.4 + 100*0.4) / 0.8 = 70.
    assert!((outcome.confidence_score.value() - 70.0).abs() < 1e-9);
    assert!(outcome.is_valid);
    // Gap of 60 exceeds the 50-point threshold despite the clear confidence.
    assert!(outcome.should_flag);
    assert!(outcome.flag_reason.unwrap().contains("disagree"));
}

#[test]
fn free_text_split_opinion_is_uncertain() {
    let validator = Validator::default();
    let sibs = siblings(&["paris", "london"]);
    let outcome = validator.validate("paris", &sibs, QuestionType::FreeText, None, None);

    // Dice similarity: 1.0 to "paris", 0.0 to "london", mean 0.5.
    assert_eq!(outcome.confidence_score.value(), 50.0);
    assert!(!outcome.is_valid);
    assert!(outcome.should_flag);
    // Free text never gets a majority-vote signal.
    assert!(outcome.signal(SignalKind::MajorityVote).is_none());
}

#[test]
fn model_signal_participates_when_present() {
    let validator = Validator::default();
    let sibs = siblings(&["blue", "blue"]);
    let with_model = validator.validate(
        "blue",
        &sibs,
        QuestionType::Choice,
        Some(Score::new(100.0)),
        None,
    );
    let without_model = validator.validate("blue", &sibs, QuestionType::Choice, None, None);

    assert_eq!(with_model.signals.len(), 3);
    assert_eq!(without_model.signals.len(), 2);
    assert_eq!(
        with_model.signal(SignalKind::ModelConfidence).unwrap().score.value(),
        100.0
    );
}

#[test]
fn low_model_confidence_drags_the_verdict_down() {
    let validator = Validator::default();
    let sibs = siblings(&["maybe", "maybe"]);
    // Agreement 100 alone would be valid; model at 0 pulls the combination
    // to (100*0.4 + 0*0.2) / 0.6 = 66.7, still valid but barely.
    let outcome = validator.validate(
        "maybe",
        &sibs,
        QuestionType::FreeText,
        Some(Score::new(0.0)),
        None,
    );
    assert!((outcome.confidence_score.value() - 200.0 / 3.0).abs() < 1e-9);
    assert!(outcome.is_valid);
}

#[test]
fn contributor_trust_is_recorded_but_not_combined() {
    let validator = Validator::default();
    let sibs = siblings(&["blue", "blue"]);
    let with_trust = validator.validate(
        "blue",
        &sibs,
        QuestionType::Choice,
        None,
        Some(Score::new(95.0)),
    );
    let without_trust = validator.validate("blue", &sibs, QuestionType::Choice, None, None);

    // Same confidence either way; trust is audit context only.
    assert_eq!(
        with_trust.confidence_score.value(),
        without_trust.confidence_score.value()
    );
    let agreement = with_trust.signal(SignalKind::Agreement).unwrap();
    assert_eq!(agreement.metadata["contributor_trust"], 95.0);
}

#[test]
fn custom_threshold_changes_the_verdict() {
    let config = ValidationConfig {
        correctness_threshold: 80.0,
        ..ValidationConfig::default()
    };
    let validator = Validator::new(config);
    let sibs = siblings(&["4", "5", "6", "7", "4"]);
    let outcome = validator.validate("4", &sibs, QuestionType::Rating, None, None);

    // Confidence 70 clears the default 60 threshold but not a raised one.
    assert!(!outcome.is_valid);
}
