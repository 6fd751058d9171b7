//! v004: rewards, ratings (trust-change audit log).

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS rewards (
            id              TEXT PRIMARY KEY,
            contributor_id  TEXT NOT NULL,
            reward_type     TEXT NOT NULL,
            value           REAL NOT NULL,
            status          TEXT NOT NULL DEFAULT 'awarded',
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            FOREIGN KEY (contributor_id) REFERENCES contributors(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_rewards_contributor ON rewards(contributor_id);

        CREATE TABLE IF NOT EXISTS ratings (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            contributor_id  TEXT NOT NULL,
            question_id     TEXT NOT NULL,
            rating_change   REAL NOT NULL,
            reason          TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            FOREIGN KEY (contributor_id) REFERENCES contributors(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_ratings_contributor ON ratings(contributor_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
