use crate::errors::TallyResult;
use crate::score::Score;

/// An external automated scoring model. The pipeline treats its output as
/// an opaque 0–100 number; it never trains or maintains the model.
pub trait IConfidenceModel: Send + Sync {
    /// Score one answer against its question. `Ok(None)` means the signal
    /// is absent — unreachable model, timeout, or no opinion — and scoring
    /// proceeds without it.
    fn confidence(&self, question_text: &str, answer_text: &str) -> TallyResult<Option<Score>>;
}
