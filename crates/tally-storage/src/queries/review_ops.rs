//! Escalation lifecycle: unique flag creation, conditional resolution, and
//! the human verdict overwrite.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::{FlagStatus, FlaggedAnswer, Signal, SignalKind};
use tally_core::score::Score;
use uuid::Uuid;

use super::{conv_err, parse_ts};
use super::validation_events;
use crate::to_storage_err;

/// Create a pending flag. The `UNIQUE(answer_id)` constraint guarantees at
/// most one escalation per answer ever exists; a conflicting insert changes
/// nothing and yields `None`.
pub fn create_flag(
    conn: &Connection,
    answer_id: &str,
    reason: &str,
) -> TallyResult<Option<FlaggedAnswer>> {
    let flag = FlaggedAnswer {
        id: Uuid::new_v4().to_string(),
        answer_id: answer_id.to_string(),
        reason: reason.to_string(),
        status: FlagStatus::Pending,
        flagged_at: Utc::now(),
        resolved_by: None,
        resolved_at: None,
        resolution_notes: None,
    };

    let changed = conn
        .execute(
            "INSERT INTO flagged_answers (id, answer_id, reason, status, flagged_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(answer_id) DO NOTHING",
            params![
                flag.id,
                flag.answer_id,
                flag.reason,
                flag.status.as_str(),
                flag.flagged_at.to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        Ok(None)
    } else {
        Ok(Some(flag))
    }
}

pub fn get_flag(conn: &Connection, id: &str) -> TallyResult<Option<FlaggedAnswer>> {
    conn.prepare(&format!("{SELECT_FLAG} WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?
        .query_row(params![id], row_to_flag)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn flag_for_answer(conn: &Connection, answer_id: &str) -> TallyResult<Option<FlaggedAnswer>> {
    conn.prepare(&format!("{SELECT_FLAG} WHERE answer_id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?
        .query_row(params![answer_id], row_to_flag)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// List flags, optionally filtered by status, newest first, paginated.
pub fn list_flags(
    conn: &Connection,
    status: Option<FlagStatus>,
    limit: usize,
    offset: usize,
) -> TallyResult<Vec<FlaggedAnswer>> {
    let mut stmt = conn
        .prepare(&format!(
            "{SELECT_FLAG}
             WHERE (?1 IS NULL OR status = ?1)
             ORDER BY flagged_at DESC
             LIMIT ?2 OFFSET ?3"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![status.map(|s| s.as_str()), limit as i64, offset as i64],
            row_to_flag,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut flags = Vec::new();
    for row in rows {
        flags.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(flags)
}

/// Transition a flag out of `pending`. The update is keyed on current
/// status, so a second resolution attempt changes zero rows and the caller
/// surfaces a conflict instead of silently overwriting the first decision.
pub fn resolve_flag(
    conn: &Connection,
    flag_id: &str,
    status: FlagStatus,
    resolved_by: &str,
    notes: Option<&str>,
) -> TallyResult<bool> {
    let changed = conn
        .execute(
            "UPDATE flagged_answers
             SET status = ?2, resolved_by = ?3, resolved_at = ?4, resolution_notes = ?5
             WHERE id = ?1 AND status = 'pending'",
            params![
                flag_id,
                status.as_str(),
                resolved_by,
                Utc::now().to_rfc3339(),
                notes,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// Force-set an answer's verdict from a human decision. Human confidence is
/// maximal; exactly one `human_review` event is appended, atomically with
/// the overwrite. Unlike the automatic claim this is unconditional — the
/// human decision overrides any prior verdict.
pub fn force_verdict(
    conn: &Connection,
    answer_id: &str,
    is_valid: bool,
    confidence: Score,
    metadata: serde_json::Value,
) -> TallyResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("force_verdict begin: {e}")))?;

    let changed = tx
        .execute(
            "UPDATE answers SET is_valid = ?2, model_confidence_score = ?3 WHERE id = ?1",
            params![answer_id, is_valid as i32, confidence.value()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        let _ = tx.rollback();
        return Err(TallyError::AnswerNotFound {
            id: answer_id.to_string(),
        });
    }

    let signal = Signal::with_metadata(SignalKind::HumanReview, confidence, metadata);
    if let Err(e) = validation_events::insert_event(&tx, answer_id, &signal) {
        let _ = tx.rollback();
        return Err(e);
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("force_verdict commit: {e}")))?;
    Ok(())
}

const SELECT_FLAG: &str = "SELECT id, answer_id, reason, status, flagged_at,
                resolved_by, resolved_at, resolution_notes
         FROM flagged_answers";

fn row_to_flag(row: &Row<'_>) -> rusqlite::Result<FlaggedAnswer> {
    let status_raw: String = row.get(3)?;
    let flagged_raw: String = row.get(4)?;
    let resolved_raw: Option<String> = row.get(6)?;
    let resolved_at = match resolved_raw {
        Some(raw) => Some(parse_ts(6, &raw)?),
        None => None,
    };
    Ok(FlaggedAnswer {
        id: row.get(0)?,
        answer_id: row.get(1)?,
        reason: row.get(2)?,
        status: status_raw.parse::<FlagStatus>().map_err(|e| conv_err(3, e))?,
        flagged_at: parse_ts(4, &flagged_raw)?,
        resolved_by: row.get(5)?,
        resolved_at,
        resolution_notes: row.get(7)?,
    })
}
