// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama backend for the Solace companion.
//!
//! Talks to a locally running Ollama server through its native `/api/chat`
//! endpoint. Availability is probed with `GET /api/tags`.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use solace_config::model::LlmConfig;
use solace_core::{ChatMessage, ProviderAdapter, SolaceError};
use tracing::info;

use crate::client::OllamaClient;
use crate::types::{ChatOptions, ChatRequest};

/// Model used when `llm.model` is unset.
pub const DEFAULT_MODEL: &str = "llama3.2";

const TOP_P: f32 = 0.9;

/// Ollama backend implementing [`ProviderAdapter`].
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: OllamaClient,
    model: String,
    temperature: f32,
}

impl OllamaProvider {
    pub fn new(config: &LlmConfig) -> Result<Self, SolaceError> {
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let client = OllamaClient::new(
            config.ollama_base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %model, base_url = %client.base_url(), "Ollama backend initialized");

        Ok(Self {
            client,
            model,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ProviderAdapter for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
                top_p: TOP_P,
            },
        };
        let response = self.client.chat(&request).await?;
        Ok(response.message.content)
    }

    async fn is_available(&self) -> bool {
        self.client.is_available().await
    }
}
