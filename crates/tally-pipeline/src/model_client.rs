//! Blocking HTTP client for the optional external confidence model.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use tally_core::config::ModelConfig;
use tally_core::errors::{TallyError, TallyResult};
use tally_core::score::Score;
use tally_core::traits::IConfidenceModel;

/// Client for an HTTP-deployed scoring model.
///
/// Every request carries a hard timeout. Any transport failure degrades to
/// "signal absent" — the model is an optional input, and its outage must
/// never fail a scoring request.
pub struct HttpConfidenceModel {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct ConfidenceRequest<'a> {
    question: &'a str,
    answer: &'a str,
}

#[derive(Deserialize)]
struct ConfidenceResponse {
    confidence: f64,
}

impl HttpConfidenceModel {
    /// Build a client from config. `Ok(None)` when no endpoint is deployed.
    pub fn from_config(config: &ModelConfig) -> TallyResult<Option<Self>> {
        let Some(endpoint) = &config.endpoint else {
            return Ok(None);
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TallyError::UpstreamUnavailable {
                upstream: "confidence model",
                reason: format!("client build: {e}"),
            })?;
        Ok(Some(Self {
            client,
            endpoint: endpoint.clone(),
        }))
    }
}

impl IConfidenceModel for HttpConfidenceModel {
    fn confidence(&self, question_text: &str, answer_text: &str) -> TallyResult<Option<Score>> {
        let request = ConfidenceRequest {
            question: question_text,
            answer: answer_text,
        };
        let result = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<ConfidenceResponse>());

        match result {
            Ok(body) => Ok(Some(Score::new(body.confidence))),
            Err(e) => {
                warn!(error = %e, "confidence model unavailable, proceeding without signal");
                Ok(None)
            }
        }
    }
}
