//! Error taxonomy for the pipeline: not-found, conflict, upstream, input.

mod storage_error;

pub use storage_error::StorageError;

pub type TallyResult<T> = Result<T, TallyError>;

/// Top-level error type for the answer quality pipeline.
///
/// Not-found and invalid-input variants are client errors and surface as-is.
/// `Conflict` means the caller lost a race (double scoring, double
/// resolution) and should re-fetch current state. `UpstreamUnavailable`
/// aborts scoring when the required sibling fetch fails; the optional model
/// signal never produces it — that one degrades to "signal absent".
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("answer not found: {id}")]
    AnswerNotFound { id: String },

    #[error("question not found: {id}")]
    QuestionNotFound { id: String },

    #[error("contributor not found: {id}")]
    ContributorNotFound { id: String },

    #[error("flagged answer not found: {id}")]
    FlagNotFound { id: String },

    #[error("conflict on {resource} {id}: {reason}")]
    Conflict {
        resource: &'static str,
        id: String,
        reason: String,
    },

    #[error("upstream {upstream} unavailable: {reason}")]
    UpstreamUnavailable { upstream: &'static str, reason: String },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TallyError {
    /// Whether this error is a recoverable write conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Failure to parse a stored enum discriminant back into its Rust type.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
