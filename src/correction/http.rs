//! HTTP-Backed Grammar Corrector
//!
//! Calls a served text2text-generation model (the reference pairing is
//! `prithivida/grammar_error_correcter_v1`) over HTTP. One request per call:
//! correction failures are surfaced to the caller as-is, with no automatic
//! retry, since the session loop must never block on a flaky corrector.

use crate::correction::TextCorrector;
use crate::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// text2text-generation request body
#[derive(Debug, Serialize)]
struct CorrectionRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    do_sample: bool,
}

/// text2text-generation response entry
#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Grammar corrector backed by an HTTP text2text-generation endpoint.
pub struct HttpCorrector {
    client: Client,
    endpoint: String,
    max_length: u32,
}

impl HttpCorrector {
    /// Create a corrector for the given endpoint.
    pub fn new(endpoint: impl Into<String>, max_length: u32, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::CorrectionFailure(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            max_length,
        })
    }

    /// Configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextCorrector for HttpCorrector {
    async fn correct(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::NoInputProvided);
        }

        debug!(endpoint = %self.endpoint, "requesting grammar correction");
        let body = CorrectionRequest {
            inputs: text,
            parameters: GenerationParameters {
                max_length: self.max_length,
                do_sample: false,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::CorrectionFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::CorrectionFailure(format!(
                "corrector returned {status}"
            )));
        }

        let generated: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| Error::CorrectionFailure(e.to_string()))?;

        generated
            .into_iter()
            .next()
            .map(|g| g.generated_text.trim().to_string())
            .ok_or_else(|| Error::CorrectionFailure("corrector returned no candidates".to_string()))
    }
}
