use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::score::Score;

/// One contributor's response to one question.
///
/// The three nullable fields are written exactly once by the scoring
/// pipeline under normal flow, and may be overwritten once more by a human
/// review resolution. `is_valid = None` means "not yet scored" — the
/// at-most-once scoring guard keys off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub question_id: String,
    pub contributor_id: String,
    pub answer_text: String,
    pub agreement_score: Option<Score>,
    pub model_confidence_score: Option<Score>,
    pub is_valid: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Create a fresh, unscored answer.
    pub fn new(question_id: &str, contributor_id: &str, answer_text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question_id: question_id.to_string(),
            contributor_id: contributor_id.to_string(),
            answer_text: answer_text.to_string(),
            agreement_score: None,
            model_confidence_score: None,
            is_valid: None,
            created_at: Utc::now(),
        }
    }

    /// Whether a verdict has already been recorded for this answer.
    pub fn is_scored(&self) -> bool {
        self.is_valid.is_some()
    }
}
