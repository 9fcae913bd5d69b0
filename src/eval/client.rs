use crate::eval::protocol::{EvalEntry, EvalRequest, EvalResponse};
use reqwest::blocking::Client;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// Evaluation failure taxonomy. Both variants are caught at the session
/// boundary and are never fatal: the user keeps drawing and retries.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Service unreachable, request not sent, or non-success status.
    #[error("evaluation transport failed: {0}")]
    Transport(String),
    /// The response arrived but does not match the expected shape.
    #[error("evaluation response malformed: {0}")]
    Protocol(String),
}

/// Client for the remote recognition/evaluation service. One POST per
/// evaluation; the response entries come back in array order.
pub struct EvalClient {
    endpoint: Url,
    http: Client,
}

impl EvalClient {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| anyhow::anyhow!("invalid evaluation endpoint '{endpoint}': {err}"))?;
        let http = Client::builder()
            .user_agent("inkcalc evaluation client")
            .build()?;
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one evaluation request. Pure transport plus parsing: folding
    /// assignments into the environment and forwarding entries to the
    /// overlay happen at the session so a failure here provably leaves all
    /// state untouched.
    pub fn evaluate(
        &self,
        image_data_url: &str,
        vars: &BTreeMap<String, String>,
    ) -> Result<Vec<EvalEntry>, EvalError> {
        let request = EvalRequest {
            image: image_data_url,
            dict_of_vars: vars,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .map_err(|err| EvalError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EvalError::Transport(format!(
                "evaluation service returned {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|err| EvalError::Transport(err.to_string()))?;
        let parsed: EvalResponse = serde_json::from_str(&body)
            .map_err(|err| EvalError::Protocol(err.to_string()))?;

        tracing::debug!(entries = parsed.data.len(), "evaluation response parsed");
        Ok(parsed.data)
    }
}
