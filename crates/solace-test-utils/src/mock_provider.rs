// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted LLM backends for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use solace_core::{ChatMessage, ProviderAdapter, SolaceError};

/// A provider that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// a default "mock response" text is returned. Every request is recorded.
pub struct ScriptedProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    available: bool,
}

impl ScriptedProvider {
    /// Create a new provider with an empty reply queue.
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Create a provider pre-loaded with the given replies.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            requests: Arc::new(Mutex::new(Vec::new())),
            available: true,
        }
    }

    /// Report the provider as unavailable from `is_available`.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Add a reply to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// Number of `generate` calls received.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Messages passed to the most recent `generate` call.
    pub async fn last_request(&self) -> Option<Vec<ChatMessage>> {
        self.requests.lock().await.last().cloned()
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError> {
        self.requests.lock().await.push(messages.to_vec());
        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string()))
    }

    async fn is_available(&self) -> bool {
        self.available
    }
}

/// A provider whose every call fails with a provider error.
#[derive(Debug, Default)]
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    pub fn new() -> Self {
        Self {
            message: "backend unreachable".to_string(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _messages: &[ChatMessage]) -> Result<String, SolaceError> {
        Err(SolaceError::provider(self.message.clone()))
    }

    async fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let provider = ScriptedProvider::new();
        let reply = provider.generate(&[ChatMessage::user("hi")]).await.unwrap();
        assert_eq!(reply, "mock response");
        assert_eq!(provider.call_count().await, 1);
    }

    #[tokio::test]
    async fn queued_responses_returned_in_order() {
        let provider =
            ScriptedProvider::with_responses(vec!["first".to_string(), "second".to_string()]);
        provider.add_response("third".to_string()).await;

        assert_eq!(provider.generate(&[]).await.unwrap(), "first");
        assert_eq!(provider.generate(&[]).await.unwrap(), "second");
        assert_eq!(provider.generate(&[]).await.unwrap(), "third");
        assert_eq!(provider.generate(&[]).await.unwrap(), "mock response");
    }

    #[tokio::test]
    async fn failing_provider_errors() {
        let provider = FailingProvider::with_message("status 503");
        let err = provider.generate(&[]).await.unwrap_err();
        assert_eq!(err.to_string(), "provider error: status 503");
        assert!(!provider.is_available().await);
    }
}
