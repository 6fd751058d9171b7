use serde::{Deserialize, Serialize};

use super::defaults;

/// External confidence model configuration.
/// No endpoint means the model signal is simply never computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// HTTP endpoint of the scoring model, if one is deployed.
    pub endpoint: Option<String>,
    /// Hard timeout for a confidence request. On expiry the signal is
    /// treated as absent, never as a scoring failure.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: defaults::DEFAULT_MODEL_TIMEOUT_SECS,
        }
    }
}
