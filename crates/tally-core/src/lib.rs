//! # tally-core
//!
//! Foundation crate for the Tally answer quality pipeline.
//! Defines all domain types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod score;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::{TallyError, TallyResult};
pub use models::{Answer, Contributor, Question, Signal, SignalKind, ValidationOutcome};
pub use score::Score;
