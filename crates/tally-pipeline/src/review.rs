//! Human review queue: listing pending escalations and applying reviewer
//! resolutions.

use serde::{Deserialize, Serialize};
use tracing::info;

use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::{FlagStatus, FlaggedAnswer, Resolution};
use tally_core::score::Score;
use tally_core::traits::IReviewStorage;

/// A reviewer's decision on one pending flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionRequest {
    pub flag_id: String,
    pub resolution: Resolution,
    /// Required when `resolution` is `Resolved`: the human's final call on
    /// the answer. Ignored for `Invalid` resolutions.
    pub correct: Option<bool>,
    pub resolved_by: String,
    pub notes: Option<String>,
}

/// What a resolution actually did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub flag: FlaggedAnswer,
    /// True when the answer's verdict was overwritten by the reviewer.
    pub verdict_forced: bool,
}

/// Read and resolve the escalation queue.
///
/// Resolution is race-safe: the status transition is a conditional update
/// keyed on the current `pending` status, so concurrent reviewers of the
/// same flag get exactly one winner and the loser a conflict.
pub struct ReviewQueue<S: IReviewStorage + ?Sized> {
    storage: std::sync::Arc<S>,
}

impl<S: IReviewStorage + ?Sized> ReviewQueue<S> {
    pub fn new(storage: std::sync::Arc<S>) -> Self {
        Self { storage }
    }

    /// List flags, newest first, optionally filtered by status.
    pub fn list(
        &self,
        status: Option<FlagStatus>,
        limit: usize,
        offset: usize,
    ) -> TallyResult<Vec<FlaggedAnswer>> {
        self.storage.list_flags(status, limit, offset)
    }

    pub fn get(&self, flag_id: &str) -> TallyResult<Option<FlaggedAnswer>> {
        self.storage.get_flag(flag_id)
    }

    /// Apply a reviewer's decision to a pending flag.
    ///
    /// `Resolved` flags overwrite the answer's verdict with the reviewer's
    /// correctness call at full confidence; `Invalid` flags close the
    /// escalation and leave the answer untouched. Trust scores and rewards
    /// already granted are never revisited.
    pub fn resolve(&self, request: &ResolutionRequest) -> TallyResult<ResolutionReport> {
        let flag = self
            .storage
            .get_flag(&request.flag_id)?
            .ok_or_else(|| TallyError::FlagNotFound {
                id: request.flag_id.clone(),
            })?;

        let target = request.resolution.target_status();
        if !flag.status.can_transition_to(target) {
            return Err(TallyError::Conflict {
                resource: "flagged_answer",
                id: flag.id,
                reason: format!("cannot transition from {} to {}", flag.status, target),
            });
        }

        let correct = match request.resolution {
            Resolution::Resolved => {
                Some(request.correct.ok_or(TallyError::InvalidInput {
                    field: "correct",
                    reason: "a resolved flag must state whether the answer was correct"
                        .to_string(),
                })?)
            }
            Resolution::Invalid => None,
        };

        let transitioned = self.storage.resolve_flag(
            &flag.id,
            target,
            &request.resolved_by,
            request.notes.as_deref(),
        )?;
        if !transitioned {
            // Another reviewer got there between our read and the update.
            return Err(TallyError::Conflict {
                resource: "flagged_answer",
                id: flag.id,
                reason: "flag is no longer pending".to_string(),
            });
        }

        let verdict_forced = if let Some(is_valid) = correct {
            let metadata = serde_json::json!({
                "resolved_by": request.resolved_by,
                "notes": request.notes,
            });
            self.storage
                .force_verdict(&flag.answer_id, is_valid, Score::max(), metadata)?;
            true
        } else {
            false
        };

        info!(
            flag_id = %flag.id,
            answer_id = %flag.answer_id,
            status = %target,
            verdict_forced,
            "flag resolved"
        );

        let flag = self
            .storage
            .get_flag(&request.flag_id)?
            .ok_or_else(|| TallyError::FlagNotFound {
                id: request.flag_id.clone(),
            })?;
        Ok(ResolutionReport {
            flag,
            verdict_forced,
        })
    }
}
