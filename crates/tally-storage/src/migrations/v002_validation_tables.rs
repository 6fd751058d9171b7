//! v002: validation_events (append-only audit trail).

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS validation_events (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            answer_id         TEXT NOT NULL,
            signal_type       TEXT NOT NULL,
            confidence_score  REAL NOT NULL,
            metadata          TEXT NOT NULL DEFAULT 'null',
            created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            FOREIGN KEY (answer_id) REFERENCES answers(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_events_answer ON validation_events(answer_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
