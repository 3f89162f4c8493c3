// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI backend for the Solace companion.
//!
//! Works against any server exposing the `/chat/completions` endpoint;
//! `llm.openai_base_url` selects the host.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use solace_config::model::LlmConfig;
use solace_core::{ChatMessage, ProviderAdapter, SolaceError};
use tracing::info;

use crate::client::OpenAiClient;
use crate::types::ChatCompletionRequest;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Environment variable consulted when `llm.api_key` is unset.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI backend implementing [`ProviderAdapter`].
///
/// Construction fails with [`SolaceError::Config`] when no API key is
/// available, so a built provider is always usable.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: OpenAiClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self, SolaceError> {
        let api_key = config.resolve_api_key(API_KEY_ENV).ok_or_else(|| {
            SolaceError::Config(format!(
                "OpenAI API key not found. Set llm.api_key in config or {API_KEY_ENV}."
            ))
        })?;
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let client = OpenAiClient::new(
            &api_key,
            config.openai_base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %model, "OpenAI backend initialized");

        Ok(Self {
            client,
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        let response = self.client.complete(&request).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| SolaceError::provider("completion response contained no message content"))
    }

    /// A key was resolved at construction, so the backend counts as available.
    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: String) -> LlmConfig {
        LlmConfig {
            backend: "openai".into(),
            openai_base_url: base_url,
            api_key: Some("sk-test".into()),
            timeout_secs: 5,
            max_tokens: 256,
            ..LlmConfig::default()
        }
    }

    #[test]
    fn missing_key_is_config_error() {
        let config = LlmConfig {
            api_key: Some(String::new()),
            ..LlmConfig::default()
        };
        // Only meaningful when the env var is absent from the test environment.
        if std::env::var(API_KEY_ENV).is_err() {
            let err = OpenAiProvider::new(&config).unwrap_err().to_string();
            assert!(err.contains("API key not found"), "got: {err}");
        }
    }

    #[test]
    fn default_model_when_unset() {
        let provider = OpenAiProvider::new(&config_for("http://localhost".into())).unwrap();
        assert_eq!(provider.model(), DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn generate_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 256,
                "messages": [{"role": "system", "content": "persona"}, {"role": "user", "content": "hi"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Peace be with you, friend."}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ]
            })))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::new(&config_for(server.uri())).unwrap();
        let reply = provider
            .generate(&[ChatMessage::system("persona"), ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(reply, "Peace be with you, friend.");
        assert!(provider.is_available().await);
    }

    #[tokio::test]
    async fn empty_choices_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::new(&config_for(server.uri())).unwrap();
        let err = provider.generate(&[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, SolaceError::Provider { .. }));
    }
}
