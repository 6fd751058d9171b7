//! v001: contributors, questions, answers.

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contributors (
            id              TEXT PRIMARY KEY,
            display_name    TEXT NOT NULL,
            trust_score     REAL NOT NULL DEFAULT 50.0,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS questions (
            id              TEXT PRIMARY KEY,
            client_id       TEXT NOT NULL,
            text            TEXT NOT NULL,
            question_type   TEXT NOT NULL,
            difficulty      TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS answers (
            id                      TEXT PRIMARY KEY,
            question_id             TEXT NOT NULL,
            contributor_id          TEXT NOT NULL,
            answer_text             TEXT NOT NULL,
            agreement_score         REAL,
            model_confidence_score  REAL,
            is_valid                INTEGER,
            created_at              TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            FOREIGN KEY (question_id) REFERENCES questions(id) ON DELETE CASCADE,
            FOREIGN KEY (contributor_id) REFERENCES contributors(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_answers_question ON answers(question_id);
        CREATE INDEX IF NOT EXISTS idx_answers_contributor ON answers(contributor_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
