//! Contributor reads and the clamped, audited trust update.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::{Contributor, Rating};
use tally_core::score::Score;

use super::parse_ts;
use crate::to_storage_err;

pub fn insert_contributor(conn: &Connection, contributor: &Contributor) -> TallyResult<()> {
    conn.execute(
        "INSERT INTO contributors (id, display_name, trust_score, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            contributor.id,
            contributor.display_name,
            contributor.trust_score.value(),
            contributor.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_contributor(conn: &Connection, id: &str) -> TallyResult<Option<Contributor>> {
    conn.prepare(
        "SELECT id, display_name, trust_score, created_at FROM contributors WHERE id = ?1",
    )
    .map_err(|e| to_storage_err(e.to_string()))?
    .query_row(params![id], row_to_contributor)
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_contributor(row: &Row<'_>) -> rusqlite::Result<Contributor> {
    let created_raw: String = row.get(3)?;
    Ok(Contributor {
        id: row.get(0)?,
        display_name: row.get(1)?,
        trust_score: Score::new(row.get(2)?),
        created_at: parse_ts(3, &created_raw)?,
    })
}

/// Apply a signed trust delta, clamped in-store, and write the Rating row
/// that justifies it — one transaction, no read-modify-write in app memory.
pub fn apply_trust_delta(
    conn: &Connection,
    contributor_id: &str,
    question_id: &str,
    delta: f64,
    reason: &str,
) -> TallyResult<Score> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("apply_trust_delta begin: {e}")))?;

    let changed = tx
        .execute(
            "UPDATE contributors
             SET trust_score = MAX(?3, MIN(?4, trust_score + ?2))
             WHERE id = ?1",
            params![contributor_id, delta, Score::MIN, Score::MAX],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        let _ = tx.rollback();
        return Err(TallyError::ContributorNotFound {
            id: contributor_id.to_string(),
        });
    }

    let result = tx
        .execute(
            "INSERT INTO ratings (contributor_id, question_id, rating_change, reason, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                contributor_id,
                question_id,
                delta,
                reason,
                Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()));
    if let Err(e) = result {
        let _ = tx.rollback();
        return Err(e);
    }

    let new_score: f64 = tx
        .query_row(
            "SELECT trust_score FROM contributors WHERE id = ?1",
            params![contributor_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("apply_trust_delta commit: {e}")))?;
    Ok(Score::new(new_score))
}

/// Trust-change audit trail for a contributor, oldest first.
pub fn ratings_for(conn: &Connection, contributor_id: &str) -> TallyResult<Vec<Rating>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, contributor_id, question_id, rating_change, reason, created_at
             FROM ratings
             WHERE contributor_id = ?1
             ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![contributor_id], |row| {
            let created_raw: String = row.get(5)?;
            Ok(Rating {
                id: row.get(0)?,
                contributor_id: row.get(1)?,
                question_id: row.get(2)?,
                rating_change: row.get(3)?,
                reason: row.get(4)?,
                created_at: parse_ts(5, &created_raw)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut ratings = Vec::new();
    for row in rows {
        ratings.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(ratings)
}
