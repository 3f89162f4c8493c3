// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for LLM backends (Ollama, OpenAI, Anthropic, mock).

use async_trait::async_trait;

use crate::error::SolaceError;
use crate::types::ChatMessage;

/// Adapter for a text-generating language model backend.
///
/// Implementations perform exactly one request per call. Retries and
/// fallback are the caller's concern.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Short backend name used in logs (e.g. "ollama").
    fn name(&self) -> &str;

    /// Sends the conversation and returns the generated reply text.
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError>;

    /// Reports whether the backend can currently serve requests.
    async fn is_available(&self) -> bool;
}
