// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama `/api/chat` request and response types.

use serde::{Deserialize, Serialize};
use solace_core::ChatMessage;

/// A non-streaming request to `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

/// Sampling options forwarded to the model runner.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
    pub top_p: f32,
}

/// Response body of a non-streaming chat call.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub message: ResponseMessage,
    #[serde(default)]
    pub done: bool,
}

/// The assistant message inside a [`ChatResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Error body returned by the Ollama server, e.g. `{"error": "model not found"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaErrorResponse {
    pub error: String,
}
