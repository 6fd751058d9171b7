//! Interface traits implemented by the storage engine and external models.

mod model;
mod storage;

pub use model::IConfidenceModel;
pub use storage::{IAnswerStorage, IReviewStorage, IRewardStorage, ITrustStorage};
