//! End-to-end pipeline tests over a real in-memory storage engine.

use std::sync::Arc;

use chrono::Utc;

use tally_core::config::PipelineConfig;
use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::{
    Answer, Contributor, Difficulty, FlagStatus, Question, QuestionType, Resolution, RewardStatus,
    SignalKind,
};
use tally_core::score::Score;
use tally_core::traits::{
    IAnswerStorage, IConfidenceModel, IReviewStorage, IRewardStorage, ITrustStorage,
};
use tally_pipeline::{ResolutionRequest, ScoringPipeline};
use tally_storage::StorageEngine;

fn make_question(id: &str, question_type: QuestionType) -> Question {
    Question {
        id: id.to_string(),
        client_id: "client-1".to_string(),
        text: "What color is the sky?".to_string(),
        question_type,
        difficulty: Difficulty::Easy,
        created_at: Utc::now(),
    }
}

fn make_answer(id: &str, question_id: &str, contributor_id: &str, text: &str) -> Answer {
    Answer {
        id: id.to_string(),
        question_id: question_id.to_string(),
        contributor_id: contributor_id.to_string(),
        answer_text: text.to_string(),
        agreement_score: None,
        model_confidence_score: None,
        is_valid: None,
        created_at: Utc::now(),
    }
}

/// Engine seeded with one question, the candidate answer "a1" from "c1",
/// and sibling answers from other contributors.
fn seeded_engine(
    question_type: QuestionType,
    candidate: &str,
    siblings: &[&str],
) -> Arc<StorageEngine> {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_contributor(&Contributor::new("c1", "Amina")).unwrap();
    engine.insert_question(&make_question("q1", question_type)).unwrap();
    engine.insert_answer(&make_answer("a1", "q1", "c1", candidate)).unwrap();
    for (i, text) in siblings.iter().enumerate() {
        let cid = format!("sib-{i}");
        engine.insert_contributor(&Contributor::new(&cid, "peer")).unwrap();
        engine
            .insert_answer(&make_answer(&format!("s{i}"), "q1", &cid, text))
            .unwrap();
    }
    Arc::new(engine)
}

fn pipeline(engine: &Arc<StorageEngine>) -> ScoringPipeline<StorageEngine> {
    ScoringPipeline::new(Arc::clone(engine), PipelineConfig::default(), None)
}

// --- Happy path ---

#[test]
fn unanimous_answer_is_validated_trusted_and_rewarded() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &["blue", "Blue", "blue!"]);
    let report = pipeline(&engine).score_answer("a1").unwrap();

    assert!(report.is_valid);
    assert_eq!(report.confidence_score.value(), 100.0);
    assert!(!report.already_scored);
    assert!(report.flag.is_none());
    assert!(report.warnings.is_empty());

    // Consensus at 100 earns the correct bonus plus the consensus bonus.
    assert_eq!(report.new_trust.unwrap().value(), 53.0);
    let reward = report.reward.unwrap();
    assert_eq!(reward.value, 15.0);
    assert_eq!(reward.status, RewardStatus::Awarded);

    let answer = engine.get_answer("a1").unwrap().unwrap();
    assert_eq!(answer.is_valid, Some(true));
    assert_eq!(answer.agreement_score.unwrap().value(), 100.0);

    let events = engine.events_for_answer("a1").unwrap();
    assert_eq!(events.len(), 2);
}

// --- Idempotency ---

#[test]
fn rescoring_reports_the_existing_verdict_without_side_effects() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &["blue", "blue"]);
    let p = pipeline(&engine);

    let first = p.score_answer("a1").unwrap();
    let second = p.score_answer("a1").unwrap();

    assert!(!first.already_scored);
    assert!(second.already_scored);
    assert_eq!(second.is_valid, first.is_valid);
    assert_eq!(second.confidence_score.value(), first.confidence_score.value());
    assert!(second.new_trust.is_none());
    assert!(second.reward.is_none());

    // Exactly one reward and one rating from the first run.
    assert_eq!(engine.rewards_for("c1").unwrap().len(), 1);
    assert_eq!(engine.ratings_for("c1").unwrap().len(), 1);
    assert_eq!(engine.events_for_answer("a1").unwrap().len(), 2);
}

// --- First answer ---

#[test]
fn first_answer_lands_in_the_band_and_is_escalated() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let report = pipeline(&engine).score_answer("a1").unwrap();

    assert!(!report.is_valid);
    assert_eq!(report.confidence_score.value(), 50.0);
    let flag = report.flag.expect("uncertain verdict should escalate");
    assert_eq!(flag.status, FlagStatus::Pending);
    assert!(flag.reason.contains("uncertain band"));

    // Incorrect verdict costs trust and earns nothing.
    assert_eq!(report.new_trust.unwrap().value(), 45.0);
    assert!(report.reward.is_none());
    assert!(engine.rewards_for("c1").unwrap().is_empty());
}

// --- Disagreement flag ---

#[test]
fn signal_disagreement_escalates_a_valid_answer() {
    let engine = seeded_engine(QuestionType::Rating, "4", &["4", "5", "6", "7", "4"]);
    let report = pipeline(&engine).score_answer("a1").unwrap();

    // Matching the mode but only 2 of 5 siblings: majority 100, agreement 40.
    assert!(report.is_valid);
    assert!((report.confidence_score.value() - 70.0).abs() < 1e-9);
    let flag = report.flag.expect("disagreement should escalate");
    assert!(flag.reason.contains("disagree"));

    // Valid but below the consensus bar: base bonus, base reward.
    assert_eq!(report.new_trust.unwrap().value(), 52.0);
    assert_eq!(report.reward.unwrap().value, 10.0);
}

// --- Model signal ---

struct FixedModel(f64);

impl IConfidenceModel for FixedModel {
    fn confidence(&self, _question: &str, _answer: &str) -> TallyResult<Option<Score>> {
        Ok(Some(Score::new(self.0)))
    }
}

struct AbsentModel;

impl IConfidenceModel for AbsentModel {
    fn confidence(&self, _question: &str, _answer: &str) -> TallyResult<Option<Score>> {
        Ok(None)
    }
}

struct BrokenModel;

impl IConfidenceModel for BrokenModel {
    fn confidence(&self, _question: &str, _answer: &str) -> TallyResult<Option<Score>> {
        Err(TallyError::UpstreamUnavailable {
            upstream: "confidence model",
            reason: "connection refused".to_string(),
        })
    }
}

#[test]
fn model_signal_is_combined_and_recorded() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &["blue", "blue"]);
    let p = ScoringPipeline::new(
        Arc::clone(&engine),
        PipelineConfig::default(),
        Some(Box::new(FixedModel(50.0))),
    );
    let report = p.score_answer("a1").unwrap();

    // (100*0.4 + 100*0.4 + 50*0.2) / 1.0 = 90.
    assert!((report.confidence_score.value() - 90.0).abs() < 1e-9);
    let events = engine.events_for_answer("a1").unwrap();
    assert_eq!(events.len(), 3);
    assert!(events
        .iter()
        .any(|e| e.signal_type == SignalKind::ModelConfidence));

    let answer = engine.get_answer("a1").unwrap().unwrap();
    assert_eq!(answer.model_confidence_score.unwrap().value(), 50.0);
}

#[test]
fn a_failing_model_costs_the_signal_not_the_verdict() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &["blue", "blue"]);
    let p = ScoringPipeline::new(
        Arc::clone(&engine),
        PipelineConfig::default(),
        Some(Box::new(BrokenModel)),
    );
    let report = p.score_answer("a1").expect("model outage must not abort scoring");

    // Scored on agreement and majority alone, verdict durable.
    assert!(report.is_valid);
    assert_eq!(report.confidence_score.value(), 100.0);
    assert_eq!(engine.events_for_answer("a1").unwrap().len(), 2);
    let answer = engine.get_answer("a1").unwrap().unwrap();
    assert_eq!(answer.is_valid, Some(true));
    assert!(answer.model_confidence_score.is_none());

    // The outage is surfaced, not hidden.
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("model confidence failed")));
}

#[test]
fn unreachable_model_degrades_to_absent_signal() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &["blue", "blue"]);
    let p = ScoringPipeline::new(
        Arc::clone(&engine),
        PipelineConfig::default(),
        Some(Box::new(AbsentModel)),
    );
    let report = p.score_answer("a1").unwrap();

    assert_eq!(report.confidence_score.value(), 100.0);
    assert_eq!(engine.events_for_answer("a1").unwrap().len(), 2);
}

// --- Errors ---

#[test]
fn scoring_an_unknown_answer_fails() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &[]);
    let err = pipeline(&engine).score_answer("ghost").unwrap_err();
    assert!(matches!(err, TallyError::AnswerNotFound { .. }));
}

// --- Review queue ---

#[test]
fn resolving_a_flag_forces_the_verdict() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let p = pipeline(&engine);
    let report = p.score_answer("a1").unwrap();
    let flag = report.flag.unwrap();
    assert!(!report.is_valid);

    let queue = p.review_queue();
    let resolution = queue
        .resolve(&ResolutionRequest {
            flag_id: flag.id.clone(),
            resolution: Resolution::Resolved,
            correct: Some(true),
            resolved_by: "reviewer-1".to_string(),
            notes: Some("verified against source".to_string()),
        })
        .unwrap();

    assert!(resolution.verdict_forced);
    assert_eq!(resolution.flag.status, FlagStatus::Resolved);
    assert_eq!(resolution.flag.resolved_by.as_deref(), Some("reviewer-1"));

    // The human decision overrides the automatic verdict at full confidence.
    let answer = engine.get_answer("a1").unwrap().unwrap();
    assert_eq!(answer.is_valid, Some(true));
    assert_eq!(answer.model_confidence_score.unwrap().value(), 100.0);
    let events = engine.events_for_answer("a1").unwrap();
    assert_eq!(events.last().unwrap().signal_type, SignalKind::HumanReview);

    // Rescoring reflects the human verdict, not the old signals.
    let rescore = p.score_answer("a1").unwrap();
    assert!(rescore.already_scored);
    assert!(rescore.is_valid);
    assert_eq!(rescore.confidence_score.value(), 100.0);
}

#[test]
fn invalid_resolution_leaves_the_answer_untouched() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let p = pipeline(&engine);
    let flag = p.score_answer("a1").unwrap().flag.unwrap();

    let resolution = p
        .review_queue()
        .resolve(&ResolutionRequest {
            flag_id: flag.id,
            resolution: Resolution::Invalid,
            correct: None,
            resolved_by: "reviewer-1".to_string(),
            notes: None,
        })
        .unwrap();

    assert!(!resolution.verdict_forced);
    assert_eq!(resolution.flag.status, FlagStatus::Invalid);
    // The automatic verdict stands.
    let answer = engine.get_answer("a1").unwrap().unwrap();
    assert_eq!(answer.is_valid, Some(false));
}

#[test]
fn resolved_flags_require_a_correctness_call() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let p = pipeline(&engine);
    let flag = p.score_answer("a1").unwrap().flag.unwrap();

    let err = p
        .review_queue()
        .resolve(&ResolutionRequest {
            flag_id: flag.id.clone(),
            resolution: Resolution::Resolved,
            correct: None,
            resolved_by: "reviewer-1".to_string(),
            notes: None,
        })
        .unwrap_err();
    assert!(matches!(err, TallyError::InvalidInput { field: "correct", .. }));

    // The failed request must not have consumed the flag.
    let still_pending = p.review_queue().get(&flag.id).unwrap().unwrap();
    assert_eq!(still_pending.status, FlagStatus::Pending);
}

#[test]
fn a_flag_is_resolved_at_most_once() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let p = pipeline(&engine);
    let flag = p.score_answer("a1").unwrap().flag.unwrap();
    let queue = p.review_queue();

    let request = ResolutionRequest {
        flag_id: flag.id,
        resolution: Resolution::Resolved,
        correct: Some(false),
        resolved_by: "reviewer-1".to_string(),
        notes: None,
    };
    queue.resolve(&request).unwrap();

    let err = queue.resolve(&request).unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn review_queue_lists_pending_flags() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let p = pipeline(&engine);
    p.score_answer("a1").unwrap();

    let pending = p
        .review_queue()
        .list(Some(FlagStatus::Pending), 10, 0)
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].answer_id, "a1");
}

#[test]
fn resolving_an_unknown_flag_fails() {
    let engine = seeded_engine(QuestionType::FreeText, "the sky is blue", &[]);
    let err = pipeline(&engine)
        .review_queue()
        .resolve(&ResolutionRequest {
            flag_id: "ghost".to_string(),
            resolution: Resolution::Invalid,
            correct: None,
            resolved_by: "reviewer-1".to_string(),
            notes: None,
        })
        .unwrap_err();
    assert!(matches!(err, TallyError::FlagNotFound { .. }));
}

// --- Rewards are never clawed back ---

#[test]
fn a_reversed_verdict_keeps_the_original_reward() {
    let engine = seeded_engine(QuestionType::Choice, "blue", &["blue", "blue"]);
    let p = pipeline(&engine);
    p.score_answer("a1").unwrap();
    assert_eq!(engine.rewards_for("c1").unwrap().len(), 1);

    // A reviewer later decides the answer was wrong.
    engine.create_flag("a1", "client appeal").unwrap().unwrap();
    let flag = engine.flag_for_answer("a1").unwrap().unwrap();
    p.review_queue()
        .resolve(&ResolutionRequest {
            flag_id: flag.id,
            resolution: Resolution::Resolved,
            correct: Some(false),
            resolved_by: "reviewer-1".to_string(),
            notes: None,
        })
        .unwrap();

    let answer = engine.get_answer("a1").unwrap().unwrap();
    assert_eq!(answer.is_valid, Some(false));
    // The entitlement already granted stays on the books.
    let rewards = engine.rewards_for("c1").unwrap();
    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0].status, RewardStatus::Awarded);
}
