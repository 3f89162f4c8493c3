// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Solace companion.
//!
//! This crate provides the error type, the conversation types exchanged
//! between the classifier, memory store and response generator, and the
//! capability traits implemented by LLM backends.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SolaceError;
pub use traits::{ProviderAdapter, RandomSource, SeededRandom, ThreadRandom};
pub use types::{ChatMessage, Emotion, Intent, Role, Theme, Turn, TurnContext};
