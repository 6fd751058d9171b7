use tally_core::models::*;
use tally_core::score::Score;

// --- Score ---

#[test]
fn score_clamps_to_bounds() {
    assert_eq!(Score::new(150.0).value(), 100.0);
    assert_eq!(Score::new(-10.0).value(), 0.0);
    assert_eq!(Score::new(42.5).value(), 42.5);
}

#[test]
fn score_arithmetic_stays_in_bounds() {
    let sum = Score::new(90.0) + Score::new(50.0);
    assert_eq!(sum.value(), 100.0);
    let diff = Score::new(10.0) - Score::new(50.0);
    assert_eq!(diff.value(), 0.0);
}

#[test]
fn score_default_is_neutral() {
    assert_eq!(Score::default().value(), 50.0);
    assert_eq!(Score::neutral().value(), 50.0);
}

#[test]
fn score_displays_one_decimal() {
    assert_eq!(Score::new(87.25).to_string(), "87.2");
}

// --- Answers ---

#[test]
fn new_answer_is_unscored() {
    let answer = Answer::new("q1", "c1", "blue");
    assert!(!answer.is_scored());
    assert!(answer.agreement_score.is_none());
    assert!(answer.model_confidence_score.is_none());
    assert!(answer.is_valid.is_none());
}

#[test]
fn answer_ids_are_unique() {
    let a = Answer::new("q1", "c1", "blue");
    let b = Answer::new("q1", "c1", "blue");
    assert_ne!(a.id, b.id);
}

// --- Question types ---

#[test]
fn closed_form_covers_rating_and_choice() {
    assert!(QuestionType::Rating.is_closed_form());
    assert!(QuestionType::Choice.is_closed_form());
    assert!(!QuestionType::FreeText.is_closed_form());
    assert!(!QuestionType::Audio.is_closed_form());
}

#[test]
fn question_type_roundtrips_through_strings() {
    for qt in [
        QuestionType::FreeText,
        QuestionType::Rating,
        QuestionType::Choice,
        QuestionType::Audio,
    ] {
        assert_eq!(qt.as_str().parse::<QuestionType>().unwrap(), qt);
    }
}

// --- Contributors and tiers ---

#[test]
fn new_contributor_starts_neutral() {
    let c = Contributor::new("c1", "Amina");
    assert_eq!(c.trust_score.value(), 50.0);
}

#[test]
fn beginner_tier_is_easy_only() {
    assert!(AccessTier::Beginner.allows(Difficulty::Easy));
    assert!(!AccessTier::Beginner.allows(Difficulty::Medium));
    assert!(!AccessTier::Beginner.allows(Difficulty::Hard));
}

#[test]
fn advanced_matches_intermediate_access() {
    assert_eq!(
        AccessTier::Advanced.allowed_difficulties(),
        AccessTier::Intermediate.allowed_difficulties()
    );
}

#[test]
fn expert_tier_allows_everything() {
    assert!(AccessTier::Expert.allows(Difficulty::Hard));
}

// --- Flag lifecycle ---

#[test]
fn pending_transitions_to_both_terminal_states() {
    assert!(FlagStatus::Pending.can_transition_to(FlagStatus::Resolved));
    assert!(FlagStatus::Pending.can_transition_to(FlagStatus::Invalid));
}

#[test]
fn terminal_states_transition_nowhere() {
    for terminal in [FlagStatus::Resolved, FlagStatus::Invalid] {
        assert!(terminal.is_terminal());
        for next in [FlagStatus::Pending, FlagStatus::Resolved, FlagStatus::Invalid] {
            assert!(!terminal.can_transition_to(next));
        }
    }
}

#[test]
fn resolution_maps_to_flag_status() {
    assert_eq!(Resolution::Resolved.target_status(), FlagStatus::Resolved);
    assert_eq!(Resolution::Invalid.target_status(), FlagStatus::Invalid);
}

// --- Outcome signal lookup ---

#[test]
fn outcome_exposes_signals_by_kind() {
    let outcome = ValidationOutcome {
        is_valid: true,
        confidence_score: Score::new(85.0),
        should_flag: false,
        flag_reason: None,
        signals: vec![
            Signal::new(SignalKind::Agreement, Score::new(80.0)),
            Signal::new(SignalKind::ModelConfidence, Score::new(95.0)),
        ],
    };
    assert_eq!(outcome.agreement_score().unwrap().value(), 80.0);
    assert_eq!(outcome.model_confidence_score().unwrap().value(), 95.0);
    assert!(outcome.signal(SignalKind::MajorityVote).is_none());
}

#[test]
fn signal_kind_serializes_snake_case() {
    let json = serde_json::to_string(&SignalKind::MajorityVote).unwrap();
    assert_eq!(json, "\"majority_vote\"");
}
