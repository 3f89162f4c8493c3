// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for a local Ollama server.

use std::time::Duration;

use solace_core::SolaceError;
use tracing::debug;

use crate::types::{ChatRequest, ChatResponse, OllamaErrorResponse};

/// How long the availability probe waits for `/api/tags`.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Thin wrapper over `reqwest` for the two Ollama endpoints Solace uses.
///
/// A single attempt is made per call; the request timeout is the only bound.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SolaceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SolaceError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a non-streaming chat request and returns the parsed response.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, SolaceError> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(url = %url, model = %request.model, messages = request.messages.len(), "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<ChatResponse>()
                .await
                .map_err(|e| SolaceError::Provider {
                    message: format!("failed to parse Ollama response: {e}"),
                    source: Some(Box::new(e)),
                });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<OllamaErrorResponse>(&body) {
            Ok(api_err) => format!("Ollama error ({status}): {}", api_err.error),
            Err(_) => format!("Ollama returned {status}: {body}"),
        };
        Err(SolaceError::provider(message))
    }

    /// True when `GET /api/tags` answers 200 within two seconds.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).timeout(PROBE_TIMEOUT).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                debug!(url = %url, error = %e, "Ollama probe failed");
                false
            }
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> SolaceError {
        if e.is_timeout() {
            SolaceError::Timeout {
                duration: self.timeout,
            }
        } else {
            SolaceError::Provider {
                message: format!("HTTP request to Ollama failed: {e}"),
                source: Some(Box::new(e)),
            }
        }
    }
}
