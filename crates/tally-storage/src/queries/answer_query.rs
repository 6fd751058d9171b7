//! Sibling fetch and the conditional verdict claim.

use rusqlite::{params, Connection};

use tally_core::errors::TallyResult;
use tally_core::models::{Answer, ValidationOutcome};

use super::answer_crud::row_to_answer;
use super::validation_events;
use crate::to_storage_err;

/// All other answers to the same question, oldest first. The candidate is
/// excluded by id so an answer is never judged against itself.
pub fn sibling_answers(
    conn: &Connection,
    question_id: &str,
    exclude_answer_id: &str,
) -> TallyResult<Vec<Answer>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, question_id, contributor_id, answer_text,
                    agreement_score, model_confidence_score, is_valid, created_at
             FROM answers
             WHERE question_id = ?1 AND id <> ?2
             ORDER BY created_at",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![question_id, exclude_answer_id], row_to_answer)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut answers = Vec::new();
    for row in rows {
        answers.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(answers)
}

/// Claim the verdict for an answer.
///
/// The update is conditional on `is_valid IS NULL`, which closes the
/// check-then-act race: of two concurrent scorers, exactly one changes a
/// row. The loser gets `Ok(false)` and must treat the stored verdict as
/// authoritative. Verdict row and validation events commit atomically.
pub fn record_verdict(
    conn: &Connection,
    answer_id: &str,
    outcome: &ValidationOutcome,
) -> TallyResult<bool> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("record_verdict begin: {e}")))?;

    let changed = tx
        .execute(
            "UPDATE answers
             SET agreement_score = ?2, model_confidence_score = ?3, is_valid = ?4
             WHERE id = ?1 AND is_valid IS NULL",
            params![
                answer_id,
                outcome.agreement_score().map(|s| s.value()),
                outcome.model_confidence_score().map(|s| s.value()),
                outcome.is_valid as i32,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        let _ = tx.rollback();
        return Ok(false);
    }

    for signal in &outcome.signals {
        if let Err(e) = validation_events::insert_event(&tx, answer_id, signal) {
            let _ = tx.rollback();
            return Err(e);
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("record_verdict commit: {e}")))?;
    Ok(true)
}
