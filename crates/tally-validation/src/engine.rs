//! Validator — runs every available signal, combines them, and decides the
//! verdict plus whether human review is needed.

use tracing::debug;

use tally_core::config::ValidationConfig;
use tally_core::models::{QuestionType, Signal, SignalKind, ValidationOutcome};
use tally_core::score::Score;

use crate::{agreement, combine, flagging, majority};

/// The multi-layer validator. Pure — all persistence is the caller's.
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Get the validator configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one answer against its siblings.
    ///
    /// Agreement is always computed; majority vote only for closed-form
    /// questions with siblings; model confidence only when supplied. The
    /// outcome's `signals` list contains exactly what was computed — a
    /// missing optional input never fabricates a zero-scored signal.
    /// `contributor_trust` is a prior about the person, not evidence about
    /// the answer: it is recorded in the agreement signal's metadata for
    /// the audit trail but excluded from the confidence combination.
    pub fn validate(
        &self,
        answer_text: &str,
        sibling_texts: &[String],
        question_type: QuestionType,
        model_confidence: Option<Score>,
        contributor_trust: Option<Score>,
    ) -> ValidationOutcome {
        let mut signals = Vec::new();

        let agreement_score = agreement::score(answer_text, sibling_texts, question_type);
        let mut metadata = serde_json::json!({ "sibling_count": sibling_texts.len() });
        if let Some(trust) = contributor_trust {
            metadata["contributor_trust"] = serde_json::json!(trust.value());
        }
        signals.push(Signal::with_metadata(
            SignalKind::Agreement,
            agreement_score,
            metadata,
        ));

        if let Some(majority_signal) = majority::signal(answer_text, sibling_texts, question_type) {
            signals.push(majority_signal);
        }

        if let Some(model_score) = model_confidence {
            signals.push(Signal::new(SignalKind::ModelConfidence, model_score));
        }

        let confidence = combine::combine(&signals, &self.config);
        let is_valid = confidence.value() >= self.config.correctness_threshold;
        let flag_reason = flagging::flag_decision(&signals, confidence, &self.config);

        debug!(
            %confidence,
            is_valid,
            signal_count = signals.len(),
            flagged = flag_reason.is_some(),
            "validated answer"
        );

        ValidationOutcome {
            is_valid,
            confidence_score: confidence,
            should_flag: flag_reason.is_some(),
            flag_reason,
            signals,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
