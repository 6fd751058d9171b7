//! Reward inserts and reads. Rewards are never updated or deleted here;
//! redemption is an external process.

use rusqlite::{params, Connection, Row};

use tally_core::errors::TallyResult;
use tally_core::models::{Reward, RewardStatus, RewardType};

use super::{conv_err, parse_ts};
use crate::to_storage_err;

pub fn insert_reward(conn: &Connection, reward: &Reward) -> TallyResult<()> {
    conn.execute(
        "INSERT INTO rewards (id, contributor_id, reward_type, value, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            reward.id,
            reward.contributor_id,
            reward.reward_type.as_str(),
            reward.value,
            reward.status.as_str(),
            reward.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn rewards_for(conn: &Connection, contributor_id: &str) -> TallyResult<Vec<Reward>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, contributor_id, reward_type, value, status, created_at
             FROM rewards
             WHERE contributor_id = ?1
             ORDER BY created_at",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![contributor_id], row_to_reward)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rewards = Vec::new();
    for row in rows {
        rewards.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(rewards)
}

fn row_to_reward(row: &Row<'_>) -> rusqlite::Result<Reward> {
    let type_raw: String = row.get(2)?;
    let status_raw: String = row.get(4)?;
    let created_raw: String = row.get(5)?;
    Ok(Reward {
        id: row.get(0)?,
        contributor_id: row.get(1)?,
        reward_type: type_raw.parse::<RewardType>().map_err(|e| conv_err(2, e))?,
        value: row.get(3)?,
        status: status_raw.parse::<RewardStatus>().map_err(|e| conv_err(4, e))?,
        created_at: parse_ts(5, &created_raw)?,
    })
}
