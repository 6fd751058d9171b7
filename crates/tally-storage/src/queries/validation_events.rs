//! Append-only validation event writes and reads.

use chrono::Utc;
use rusqlite::{params, Connection, Row};

use tally_core::errors::TallyResult;
use tally_core::models::{Signal, SignalKind, ValidationEvent};
use tally_core::score::Score;

use super::{conv_err, parse_ts};
use crate::to_storage_err;

/// Append one event for a computed signal. Events are never updated or
/// deleted.
pub fn insert_event(conn: &Connection, answer_id: &str, signal: &Signal) -> TallyResult<()> {
    let metadata = serde_json::to_string(&signal.metadata)?;
    conn.execute(
        "INSERT INTO validation_events (answer_id, signal_type, confidence_score, metadata, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            answer_id,
            signal.kind.as_str(),
            signal.score.value(),
            metadata,
            Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All events for an answer, oldest first.
pub fn events_for_answer(conn: &Connection, answer_id: &str) -> TallyResult<Vec<ValidationEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, answer_id, signal_type, confidence_score, metadata, created_at
             FROM validation_events
             WHERE answer_id = ?1
             ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![answer_id], row_to_event)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        events.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(events)
}

fn row_to_event(row: &Row<'_>) -> rusqlite::Result<ValidationEvent> {
    let kind_raw: String = row.get(2)?;
    let metadata_raw: String = row.get(4)?;
    let created_raw: String = row.get(5)?;
    Ok(ValidationEvent {
        id: row.get(0)?,
        answer_id: row.get(1)?,
        signal_type: kind_raw.parse::<SignalKind>().map_err(|e| conv_err(2, e))?,
        confidence_score: Score::new(row.get(3)?),
        metadata: serde_json::from_str(&metadata_raw).map_err(|e| conv_err(4, e))?,
        created_at: parse_ts(5, &created_raw)?,
    })
}
