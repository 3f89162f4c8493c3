// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Anthropic Messages API.
//!
//! Provides [`AnthropicClient`] which handles request construction,
//! authentication and error decoding. Each call makes exactly one attempt.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use solace_core::SolaceError;
use tracing::debug;

use crate::types::{ApiErrorResponse, MessageRequest, MessageResponse};

/// API version header value sent with every request.
pub const API_VERSION: &str = "2023-06-01";

/// HTTP client for Anthropic API communication.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AnthropicClient {
    /// Creates a new Anthropic API client.
    ///
    /// # Arguments
    /// * `api_key` - Anthropic API key for authentication
    /// * `base_url` - API host, without the `/v1/messages` path
    /// * `timeout` - Upper bound for a single request
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SolaceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                SolaceError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
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

    /// Sends a non-streaming message request.
    pub async fn complete_message(
        &self,
        request: &MessageRequest,
    ) -> Result<MessageResponse, SolaceError> {
        let url = format!("{}/v1/messages", self.base_url);
        debug!(model = %request.model, messages = request.messages.len(), "sending message request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SolaceError::Timeout {
                        duration: self.timeout,
                    }
                } else {
                    SolaceError::Provider {
                        message: format!("HTTP request failed: {e}"),
                        source: Some(Box::new(e)),
                    }
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<MessageResponse>()
                .await
                .map_err(|e| SolaceError::Provider {
                    message: format!("failed to parse response: {e}"),
                    source: Some(Box::new(e)),
                });
        }

        let body = response.text().await.unwrap_or_default();
        let error_msg = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
            format!(
                "Anthropic API error ({}): {}",
                api_err.error.type_, api_err.error.message
            )
        } else {
            format!("API returned {status}: {body}")
        };
        Err(SolaceError::provider(error_msg))
    }
}
