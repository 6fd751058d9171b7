//! Pipeline configuration: per-subsystem structs plus the TOML-loadable
//! aggregate. Every tunable constant lives here, not in the algorithms.

pub mod defaults;

mod model_config;
mod reward_config;
mod trust_config;
mod validation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};

pub use model_config::ModelConfig;
pub use reward_config::RewardConfig;
pub use trust_config::TrustConfig;
pub use validation_config::ValidationConfig;

/// Aggregate configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub validation: ValidationConfig,
    pub trust: TrustConfig,
    pub reward: RewardConfig,
    pub model: ModelConfig,
}

impl PipelineConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults section by section.
    pub fn from_toml_file(path: &Path) -> TallyResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TallyError::ConfigError {
            reason: format!("read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| TallyError::ConfigError {
            reason: format!("parse {}: {e}", path.display()),
        })
    }
}
