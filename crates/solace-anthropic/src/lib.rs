// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude backend for the Solace companion.
//!
//! This crate implements [`ProviderAdapter`] for the Anthropic Messages API.
//! System messages are lifted out of the conversation into the request's
//! `system` field.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use solace_config::model::LlmConfig;
use solace_core::{ChatMessage, ProviderAdapter, Role, SolaceError};
use tracing::info;

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, MessageRequest};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Environment variable consulted when `llm.api_key` is unset.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Anthropic Claude backend implementing [`ProviderAdapter`].
///
/// API key resolution order: config -> `ANTHROPIC_API_KEY` env var -> error.
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicProvider {
    pub fn new(config: &LlmConfig) -> Result<Self, SolaceError> {
        let api_key = config.resolve_api_key(API_KEY_ENV).ok_or_else(|| {
            SolaceError::Config(format!(
                "Anthropic API key not found. Set llm.api_key in config or {API_KEY_ENV}."
            ))
        })?;
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let client = AnthropicClient::new(
            &api_key,
            config.anthropic_base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %model, "Anthropic backend initialized");

        Ok(Self {
            client,
            model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Converts a generic conversation into a Messages API request.
    fn to_message_request(&self, messages: &[ChatMessage]) -> MessageRequest {
        let system: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();

        let messages = messages
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| ApiMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        MessageRequest {
            model: self.model.clone(),
            messages,
            system: if system.is_empty() {
                None
            } else {
                Some(system.join("\n\n"))
            },
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError> {
        let request = self.to_message_request(messages);
        let response = self.client.complete_message(&request).await?;
        Ok(response.text())
    }

    async fn is_available(&self) -> bool {
        true
    }
}
