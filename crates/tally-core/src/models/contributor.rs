use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::Difficulty;
use crate::score::Score;

/// A contributor's pipeline-visible slice of the user record.
///
/// `trust_score` is mutated only by the trust ledger, always through an
/// audited Rating row. The access tier is never stored — it is recomputed
/// from the trust score on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub id: String,
    pub display_name: String,
    pub trust_score: Score,
    pub created_at: DateTime<Utc>,
}

impl Contributor {
    /// Create a contributor starting at the neutral trust midpoint.
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            trust_score: Score::neutral(),
            created_at: Utc::now(),
        }
    }
}

/// Access tier derived from trust score. Gates question difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl AccessTier {
    /// Difficulties this tier may attempt. Advanced has the same access as
    /// Intermediate until a product decision raises it.
    pub fn allowed_difficulties(self) -> &'static [Difficulty] {
        match self {
            Self::Beginner => &[Difficulty::Easy],
            Self::Intermediate | Self::Advanced => &[Difficulty::Easy, Difficulty::Medium],
            Self::Expert => &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
        }
    }

    pub fn allows(self, difficulty: Difficulty) -> bool {
        self.allowed_difficulties().contains(&difficulty)
    }
}
