//! The scoring pipeline facade: fetch context, validate, claim the verdict,
//! then fan out to flagging, trust, and rewards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tally_core::config::PipelineConfig;
use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::{
    FlaggedAnswer, Reward, Signal, SignalKind, ValidationEvent, ValidationOutcome,
};
use tally_core::score::Score;
use tally_core::traits::{
    IAnswerStorage, IConfidenceModel, IRewardStorage, IReviewStorage, ITrustStorage,
};
use tally_validation::{combine, Validator};

use crate::review::ReviewQueue;
use crate::reward::RewardAllocator;
use crate::trust::TrustLedger;

/// What one scoring run produced.
///
/// `already_scored` reports show the verdict on record without re-running
/// anything; their trust/reward/flag fields are always `None` because this
/// run caused no side effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringReport {
    pub answer_id: String,
    pub is_valid: bool,
    pub confidence_score: Score,
    pub already_scored: bool,
    /// The signals behind the verdict. For an `already_scored` report these
    /// are read back from the validation event trail.
    pub signals: Vec<Signal>,
    pub flag: Option<FlaggedAnswer>,
    pub new_trust: Option<Score>,
    pub reward: Option<Reward>,
    /// Secondary effects that failed. The verdict itself is durable before
    /// any of these run, so a warning never invalidates the report.
    pub warnings: Vec<String>,
}

/// Orchestrates scoring end to end over one storage backend.
///
/// Storage is the only required collaborator; the confidence model is
/// optional and its absence just drops one signal.
pub struct ScoringPipeline<S>
where
    S: IAnswerStorage + ITrustStorage + IRewardStorage + IReviewStorage + ?Sized,
{
    storage: Arc<S>,
    validator: Validator,
    trust: TrustLedger,
    rewards: RewardAllocator,
    model: Option<Box<dyn IConfidenceModel>>,
}

impl<S> ScoringPipeline<S>
where
    S: IAnswerStorage + ITrustStorage + IRewardStorage + IReviewStorage + ?Sized,
{
    pub fn new(
        storage: Arc<S>,
        config: PipelineConfig,
        model: Option<Box<dyn IConfidenceModel>>,
    ) -> Self {
        Self {
            storage,
            validator: Validator::new(config.validation),
            trust: TrustLedger::new(config.trust),
            rewards: RewardAllocator::new(config.reward),
            model,
        }
    }

    /// The review queue over the same storage backend.
    pub fn review_queue(&self) -> ReviewQueue<S> {
        ReviewQueue::new(Arc::clone(&self.storage))
    }

    /// Score one answer.
    ///
    /// Idempotent: the verdict write is a conditional claim on
    /// `is_valid IS NULL`, so re-invocations (retries, duplicate queue
    /// deliveries, concurrent scorers) observe the existing verdict instead
    /// of re-scoring or double-granting trust and rewards.
    pub fn score_answer(&self, answer_id: &str) -> TallyResult<ScoringReport> {
        let answer = self
            .storage
            .get_answer(answer_id)?
            .ok_or_else(|| TallyError::AnswerNotFound {
                id: answer_id.to_string(),
            })?;

        if let Some(is_valid) = answer.is_valid {
            return self.existing_report(answer_id, is_valid);
        }

        let question = self.storage.get_question(&answer.question_id)?.ok_or_else(|| {
            TallyError::QuestionNotFound {
                id: answer.question_id.clone(),
            }
        })?;

        let siblings = self
            .storage
            .sibling_answers(&answer.question_id, &answer.id)
            .map_err(|e| TallyError::UpstreamUnavailable {
                upstream: "answer store",
                reason: e.to_string(),
            })?;
        let sibling_texts: Vec<String> =
            siblings.iter().map(|s| s.answer_text.clone()).collect();

        // The model is an optional input: a failing implementation costs
        // one signal, never the verdict.
        let mut warnings = Vec::new();
        let model_confidence = match &self.model {
            Some(model) => match model.confidence(&question.text, &answer.answer_text) {
                Ok(confidence) => confidence,
                Err(e) => {
                    warn!(error = %e, "confidence model failed, scoring without signal");
                    warnings.push(format!("model confidence failed: {e}"));
                    None
                }
            },
            None => None,
        };

        let contributor_trust = match self.storage.get_contributor(&answer.contributor_id) {
            Ok(c) => c.map(|c| c.trust_score),
            Err(e) => {
                warn!(error = %e, "contributor lookup failed, scoring without trust context");
                None
            }
        };

        let outcome = self.validator.validate(
            &answer.answer_text,
            &sibling_texts,
            question.question_type,
            model_confidence,
            contributor_trust,
        );

        if !self.storage.record_verdict(&answer.id, &outcome)? {
            // Lost the claim; surface whatever the winner wrote.
            let answer = self
                .storage
                .get_answer(answer_id)?
                .ok_or_else(|| TallyError::AnswerNotFound {
                    id: answer_id.to_string(),
                })?;
            let is_valid = answer.is_valid.ok_or(TallyError::Conflict {
                resource: "answer",
                id: answer_id.to_string(),
                reason: "verdict claim lost but no verdict on record".to_string(),
            })?;
            return self.existing_report(answer_id, is_valid);
        }

        let mut report = ScoringReport {
            answer_id: answer.id.clone(),
            is_valid: outcome.is_valid,
            confidence_score: outcome.confidence_score,
            already_scored: false,
            signals: outcome.signals.clone(),
            flag: None,
            new_trust: None,
            reward: None,
            warnings,
        };

        self.apply_secondary_effects(&answer, &outcome, &mut report);

        info!(
            answer_id = %report.answer_id,
            is_valid = report.is_valid,
            confidence = %report.confidence_score,
            flagged = report.flag.is_some(),
            warning_count = report.warnings.len(),
            "answer scored"
        );
        Ok(report)
    }

    /// Trust, reward, and flag follow the durable verdict. Each failure is
    /// recorded as a warning rather than unwinding the verdict.
    fn apply_secondary_effects(
        &self,
        answer: &tally_core::models::Answer,
        outcome: &ValidationOutcome,
        report: &mut ScoringReport,
    ) {
        let agreement = outcome.agreement_score().unwrap_or_else(Score::neutral);
        match self.trust.apply_outcome(
            self.storage.as_ref(),
            &answer.contributor_id,
            &answer.question_id,
            outcome.is_valid,
            agreement,
        ) {
            Ok(new_trust) => report.new_trust = Some(new_trust),
            Err(e) => {
                warn!(error = %e, contributor_id = %answer.contributor_id, "trust update failed");
                report.warnings.push(format!("trust update failed: {e}"));
            }
        }

        if outcome.is_valid {
            match self
                .rewards
                .allocate(self.storage.as_ref(), &answer.contributor_id, agreement)
            {
                Ok(reward) => report.reward = Some(reward),
                Err(e) => {
                    warn!(error = %e, contributor_id = %answer.contributor_id, "reward allocation failed");
                    report.warnings.push(format!("reward allocation failed: {e}"));
                }
            }
        }

        if let Some(reason) = &outcome.flag_reason {
            match self.storage.create_flag(&answer.id, reason) {
                Ok(flag) => report.flag = flag,
                Err(e) => {
                    warn!(error = %e, answer_id = %answer.id, "flag creation failed");
                    report.warnings.push(format!("flag creation failed: {e}"));
                }
            }
        }
    }

    /// Report for an answer that already carries a verdict, with confidence
    /// reconstructed from the validation event trail.
    fn existing_report(&self, answer_id: &str, is_valid: bool) -> TallyResult<ScoringReport> {
        let events = self.storage.events_for_answer(answer_id)?;
        let confidence = confidence_from_events(&events, self.validator.config());
        let signals = events
            .into_iter()
            .map(|e| Signal::with_metadata(e.signal_type, e.confidence_score, e.metadata))
            .collect();
        Ok(ScoringReport {
            answer_id: answer_id.to_string(),
            is_valid,
            confidence_score: confidence,
            already_scored: true,
            signals,
            flag: None,
            new_trust: None,
            reward: None,
            warnings: Vec::new(),
        })
    }
}

/// Reconstruct the combined confidence of a recorded verdict from its event
/// trail. A human review event is authoritative; otherwise the stored
/// signals are re-combined under the current weights.
fn confidence_from_events(
    events: &[ValidationEvent],
    config: &tally_core::config::ValidationConfig,
) -> Score {
    if let Some(review) = events
        .iter()
        .rev()
        .find(|e| e.signal_type == SignalKind::HumanReview)
    {
        return review.confidence_score;
    }
    let signals: Vec<Signal> = events
        .iter()
        .map(|e| Signal::with_metadata(e.signal_type, e.confidence_score, e.metadata.clone()))
        .collect();
    combine::combine(&signals, config)
}
