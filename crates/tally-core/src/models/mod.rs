//! Domain models for questions, answers, signals, flags, rewards, ratings.

pub mod answer;
pub mod contributor;
pub mod flag;
pub mod outcome;
pub mod question;
pub mod rating;
pub mod reward;
pub mod signal;
pub mod validation_event;

pub use answer::Answer;
pub use contributor::{AccessTier, Contributor};
pub use flag::{FlagStatus, FlaggedAnswer, Resolution};
pub use outcome::ValidationOutcome;
pub use question::{Difficulty, Question, QuestionType};
pub use rating::Rating;
pub use reward::{Reward, RewardStatus, RewardType};
pub use signal::{Signal, SignalKind};
pub use validation_event::ValidationEvent;
