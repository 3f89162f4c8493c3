// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response generation for the Solace companion.
//!
//! [`ConversationHandler`] selects rule-based replies from fixed templates and
//! the content pools. [`ResponseGenerator`] optionally consults an LLM backend
//! first and falls back to the handler on any failure.

pub mod content;
pub mod generator;
pub mod handler;

pub use content::{load_persona_prompt, ContentLibrary};
pub use generator::{ReplySource, ResponseGenerator, DEFAULT_HISTORY_TURNS};
pub use handler::ConversationHandler;
