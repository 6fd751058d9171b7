use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Score clamped to [0.0, 100.0].
/// Used for agreement, confidence, and contributor trust values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    /// Lower bound of every score.
    pub const MIN: f64 = 0.0;
    /// Upper bound of every score.
    pub const MAX: f64 = 100.0;
    /// Agreement assigned to an answer with zero scored peers — an answer
    /// cannot be judged relative to nobody, so it lands in the middle.
    pub const NEUTRAL: f64 = 50.0;

    /// Create a new Score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// The neutral midpoint score.
    pub fn neutral() -> Self {
        Self(Self::NEUTRAL)
    }

    /// The maximal score. Human review confidence is always maximal.
    pub fn max() -> Self {
        Self(Self::MAX)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}
