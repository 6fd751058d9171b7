//! # tally-pipeline
//!
//! Orchestration for the answer quality pipeline: the trust ledger, reward
//! allocator, review queue, optional external confidence model client, and
//! the `ScoringPipeline` facade the surrounding application calls.
//!
//! The two external operations live here: trigger scoring for an answer
//! (`ScoringPipeline::score_answer`) and list/resolve escalations
//! (`ReviewQueue`).

pub mod engine;
pub mod model_client;
pub mod observability;
pub mod review;
pub mod reward;
pub mod trust;

pub use engine::{ScoringPipeline, ScoringReport};
pub use model_client::HttpConfidenceModel;
pub use observability::init_tracing;
pub use review::{ResolutionReport, ResolutionRequest, ReviewQueue};
pub use reward::RewardAllocator;
pub use trust::{tier_for, TrustLedger};
