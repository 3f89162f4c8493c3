// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM backend selection.
//!
//! [`resolve`] turns `llm.backend` into a concrete [`LlmBackend`]. It never
//! fails: a missing API key, an unreachable Ollama server or an unknown
//! backend name all degrade to [`LlmBackend::Mock`] with a warning.

use std::str::FromStr;

use async_trait::async_trait;
use solace_anthropic::AnthropicProvider;
use solace_config::model::LlmConfig;
use solace_core::{ChatMessage, ProviderAdapter, SolaceError};
use solace_ollama::OllamaProvider;
use solace_openai::OpenAiProvider;
use strum::{Display, EnumString};
use tracing::{info, warn};

use crate::mock::MockBackend;

/// Backend names accepted in `llm.backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BackendKind {
    Mock,
    Ollama,
    OpenAi,
    Anthropic,
}

/// A selected LLM backend.
#[derive(Debug, Clone)]
pub enum LlmBackend {
    Ollama(OllamaProvider),
    OpenAi(OpenAiProvider),
    Anthropic(AnthropicProvider),
    Mock(MockBackend),
}

impl LlmBackend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Ollama(_) => BackendKind::Ollama,
            Self::OpenAi(_) => BackendKind::OpenAi,
            Self::Anthropic(_) => BackendKind::Anthropic,
            Self::Mock(_) => BackendKind::Mock,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock(_))
    }
}

#[async_trait]
impl ProviderAdapter for LlmBackend {
    fn name(&self) -> &str {
        match self {
            Self::Ollama(p) => p.name(),
            Self::OpenAi(p) => p.name(),
            Self::Anthropic(p) => p.name(),
            Self::Mock(p) => p.name(),
        }
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError> {
        match self {
            Self::Ollama(p) => p.generate(messages).await,
            Self::OpenAi(p) => p.generate(messages).await,
            Self::Anthropic(p) => p.generate(messages).await,
            Self::Mock(p) => p.generate(messages).await,
        }
    }

    async fn is_available(&self) -> bool {
        match self {
            Self::Ollama(p) => p.is_available().await,
            Self::OpenAi(p) => p.is_available().await,
            Self::Anthropic(p) => p.is_available().await,
            Self::Mock(p) => p.is_available().await,
        }
    }
}

/// Select the backend named in config, degrading to mock when it cannot be used.
pub async fn resolve(config: &LlmConfig) -> LlmBackend {
    let kind = match BackendKind::from_str(config.backend.trim()) {
        Ok(kind) => kind,
        Err(_) => {
            warn!(backend = %config.backend, "unknown LLM backend, using mock");
            return LlmBackend::Mock(MockBackend);
        }
    };

    let built = match kind {
        BackendKind::Mock => return LlmBackend::Mock(MockBackend),
        BackendKind::Ollama => OllamaProvider::new(config).map(LlmBackend::Ollama),
        BackendKind::OpenAi => OpenAiProvider::new(config).map(LlmBackend::OpenAi),
        BackendKind::Anthropic => AnthropicProvider::new(config).map(LlmBackend::Anthropic),
    };

    let backend = match built {
        Ok(backend) => backend,
        Err(e) => {
            warn!(backend = %kind, error = %e, "LLM backend unusable, using mock");
            return LlmBackend::Mock(MockBackend);
        }
    };

    if !backend.is_available().await {
        warn!(backend = %kind, "LLM backend not available, using mock");
        return LlmBackend::Mock(MockBackend);
    }

    info!(backend = %kind, "LLM backend selected");
    backend
}
