use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;
use crate::score::Score;

/// The kind of validation signal. New kinds extend this enum; the combiner
/// folds over whichever kinds are present, so adding one never rewrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    MajorityVote,
    Agreement,
    ModelConfidence,
    HumanReview,
}

impl SignalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MajorityVote => "majority_vote",
            Self::Agreement => "agreement",
            Self::ModelConfidence => "model_confidence",
            Self::HumanReview => "human_review",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "majority_vote" => Ok(Self::MajorityVote),
            "agreement" => Ok(Self::Agreement),
            "model_confidence" => Ok(Self::ModelConfidence),
            "human_review" => Ok(Self::HumanReview),
            _ => Err(ParseEnumError {
                kind: "signal_type",
                value: s.to_string(),
            }),
        }
    }
}

/// One computed validation signal: a tagged kind, its score, and any
/// kind-specific metadata (majority share, sibling count, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub score: Score,
    pub metadata: serde_json::Value,
}

impl Signal {
    pub fn new(kind: SignalKind, score: Score) -> Self {
        Self {
            kind,
            score,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_metadata(kind: SignalKind, score: Score, metadata: serde_json::Value) -> Self {
        Self {
            kind,
            score,
            metadata,
        }
    }
}
