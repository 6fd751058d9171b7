use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// Escalation state. `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagStatus {
    Pending,
    Resolved,
    Invalid,
}

impl FlagStatus {
    /// Allowed-transition table. Terminal states transition nowhere;
    /// disallowed transitions are rejected at the boundary with a conflict.
    pub fn can_transition_to(self, next: FlagStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Resolved) | (Self::Pending, Self::Invalid)
        )
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FlagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            "invalid" => Ok(Self::Invalid),
            _ => Err(ParseEnumError {
                kind: "flag_status",
                value: s.to_string(),
            }),
        }
    }
}

/// A reviewer's decision on a pending escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The escalation was reviewed and the answer's final correctness set.
    Resolved,
    /// The escalation itself was spurious; the answer is left untouched.
    Invalid,
}

impl Resolution {
    pub fn target_status(self) -> FlagStatus {
        match self {
            Self::Resolved => FlagStatus::Resolved,
            Self::Invalid => FlagStatus::Invalid,
        }
    }
}

/// An escalation record: an answer routed to a human reviewer.
/// Created at most once per answer (unique on `answer_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedAnswer {
    pub id: String,
    pub answer_id: String,
    pub reason: String,
    pub status: FlagStatus,
    pub flagged_at: DateTime<Utc>,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_notes: Option<String>,
}
