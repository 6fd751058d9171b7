use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// The kind of prompt a question poses to contributors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    FreeText,
    Rating,
    Choice,
    Audio,
}

impl QuestionType {
    /// Closed-form questions draw from a small fixed answer space, so
    /// exact-match statistics (majority vote, match ratio) apply to them.
    pub fn is_closed_form(self) -> bool {
        matches!(self, Self::Rating | Self::Choice)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FreeText => "free_text",
            Self::Rating => "rating",
            Self::Choice => "choice",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free_text" => Ok(Self::FreeText),
            "rating" => Ok(Self::Rating),
            "choice" => Ok(Self::Choice),
            "audio" => Ok(Self::Audio),
            _ => Err(ParseEnumError {
                kind: "question_type",
                value: s.to_string(),
            }),
        }
    }
}

/// Difficulty tier of a question. Gates which contributors may answer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseEnumError {
                kind: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

/// An immutable prompt owned by a client campaign. Read-only to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub client_id: String,
    pub text: String,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}
