//! # tally-validation
//!
//! Multi-layer answer validation.
//!
//! ## Signals
//! 1. **Agreement** — how closely the answer matches its sibling answers
//! 2. **Majority vote** — does it match the single most common sibling
//!    answer (closed-form question types only)
//! 3. **Model confidence** — opaque 0–100 input from an external model
//!
//! The combiner folds over whichever signals are present with per-kind
//! weights; the flag decision escalates sharp signal disagreement and
//! uncertain-band confidence to human review.

pub mod agreement;
pub mod combine;
pub mod engine;
pub mod flagging;
pub mod majority;
pub mod normalize;

pub use engine::Validator;
