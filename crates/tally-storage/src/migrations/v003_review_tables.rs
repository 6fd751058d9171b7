//! v003: flagged_answers (escalation records, unique per answer).

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS flagged_answers (
            id                TEXT PRIMARY KEY,
            answer_id         TEXT NOT NULL UNIQUE,
            reason            TEXT NOT NULL,
            status            TEXT NOT NULL DEFAULT 'pending',
            flagged_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            resolved_by       TEXT,
            resolved_at       TEXT,
            resolution_notes  TEXT,
            FOREIGN KEY (answer_id) REFERENCES answers(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_flags_status ON flagged_answers(status);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
