use crate::errors::TallyResult;
use crate::models::{
    Answer, Contributor, FlagStatus, FlaggedAnswer, Question, Rating, Reward, ValidationEvent,
    ValidationOutcome,
};
use crate::score::Score;

/// Question/answer persistence plus the conditional verdict claim.
pub trait IAnswerStorage: Send + Sync {
    fn insert_question(&self, question: &Question) -> TallyResult<()>;
    fn get_question(&self, id: &str) -> TallyResult<Option<Question>>;

    fn insert_answer(&self, answer: &Answer) -> TallyResult<()>;
    fn get_answer(&self, id: &str) -> TallyResult<Option<Answer>>;

    /// All other answers to the same question. The candidate itself is
    /// always excluded.
    fn sibling_answers(&self, question_id: &str, exclude_answer_id: &str)
        -> TallyResult<Vec<Answer>>;

    /// Claim the verdict for an answer: write scores, `is_valid`, and one
    /// validation event per computed signal, in a single transaction, but
    /// only where `is_valid` is still null. Returns `false` when another
    /// scorer already claimed it — in that case nothing was written.
    fn record_verdict(&self, answer_id: &str, outcome: &ValidationOutcome) -> TallyResult<bool>;

    /// Audit trail of signals applied to an answer, oldest first.
    fn events_for_answer(&self, answer_id: &str) -> TallyResult<Vec<ValidationEvent>>;
}

/// Contributor trust persistence. Trust mutations are always paired with a
/// Rating audit row in the same transaction, and clamping happens in-store.
pub trait ITrustStorage: Send + Sync {
    fn insert_contributor(&self, contributor: &Contributor) -> TallyResult<()>;
    fn get_contributor(&self, id: &str) -> TallyResult<Option<Contributor>>;

    /// Apply a signed delta to a contributor's trust score, clamped to the
    /// score bounds, and record the Rating that justifies it. Returns the
    /// new trust score.
    fn apply_trust_delta(
        &self,
        contributor_id: &str,
        question_id: &str,
        delta: f64,
        reason: &str,
    ) -> TallyResult<Score>;

    fn ratings_for(&self, contributor_id: &str) -> TallyResult<Vec<Rating>>;
}

/// Reward persistence. Rewards are never deleted or reversed.
pub trait IRewardStorage: Send + Sync {
    fn insert_reward(&self, reward: &Reward) -> TallyResult<()>;
    fn rewards_for(&self, contributor_id: &str) -> TallyResult<Vec<Reward>>;
}

/// Escalation persistence: flag lifecycle and the human verdict overwrite.
pub trait IReviewStorage: Send + Sync {
    /// Create a pending flag for an answer. At most one flag ever exists
    /// per answer; returns `None` when one already does.
    fn create_flag(&self, answer_id: &str, reason: &str) -> TallyResult<Option<FlaggedAnswer>>;

    fn get_flag(&self, id: &str) -> TallyResult<Option<FlaggedAnswer>>;
    fn flag_for_answer(&self, answer_id: &str) -> TallyResult<Option<FlaggedAnswer>>;

    /// List flags, optionally filtered by status, paginated.
    fn list_flags(
        &self,
        status: Option<FlagStatus>,
        limit: usize,
        offset: usize,
    ) -> TallyResult<Vec<FlaggedAnswer>>;

    /// Transition a flag out of `pending` via a conditional update keyed on
    /// current status. Returns `false` when the flag was not pending, so
    /// two reviewers can never both win.
    fn resolve_flag(
        &self,
        flag_id: &str,
        status: FlagStatus,
        resolved_by: &str,
        notes: Option<&str>,
    ) -> TallyResult<bool>;

    /// Force-set an answer's verdict from a human decision and append
    /// exactly one `human_review` validation event, in one transaction.
    fn force_verdict(
        &self,
        answer_id: &str,
        is_valid: bool,
        confidence: Score,
        metadata: serde_json::Value,
    ) -> TallyResult<()>;
}
