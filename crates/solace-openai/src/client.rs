// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat completion APIs.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use solace_core::SolaceError;
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Bearer-authenticated client. One attempt per call, bounded by the timeout.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SolaceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| SolaceError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

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

    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, SolaceError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %request.model, messages = request.messages.len(), "sending chat completion request");

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
                .json::<ChatCompletionResponse>()
                .await
                .map_err(|e| SolaceError::Provider {
                    message: format!("failed to parse completion response: {e}"),
                    source: Some(Box::new(e)),
                });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(api_err) => format!(
                "OpenAI API error ({}): {}",
                api_err.error.type_.as_deref().unwrap_or("unknown"),
                api_err.error.message
            ),
            Err(_) => format!("API returned {status}: {body}"),
        };
        Err(SolaceError::provider(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::ChatMessage;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatMessage::user("Hello")],
            temperature: 0.7,
            max_tokens: 64,
        }
    }

    #[tokio::test]
    async fn sends_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "choices": [{"message": {"role": "assistant", "content": "Hi"}, "finish_reason": "stop"}]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("sk-test", server.uri(), Duration::from_secs(5)).unwrap();
        let response = client.complete(&test_request()).await.unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn error_envelope_is_reported_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "Rate limit reached", "type": "rate_limit_exceeded"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new("sk-test", server.uri(), Duration::from_secs(5)).unwrap();
        let err = client.complete(&test_request()).await.unwrap_err().to_string();
        assert!(err.contains("rate_limit_exceeded"), "got: {err}");
    }

    #[tokio::test]
    async fn plain_text_error_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("sk-test", server.uri(), Duration::from_secs(5)).unwrap();
        let err = client.complete(&test_request()).await.unwrap_err().to_string();
        assert!(err.contains("502"), "got: {err}");
        assert!(err.contains("bad gateway"), "got: {err}");
    }

    #[test]
    fn rejects_key_with_newline() {
        let result = OpenAiClient::new("sk\nbad", "http://localhost", Duration::from_secs(5));
        assert!(matches!(result, Err(SolaceError::Config(_))));
    }
}
