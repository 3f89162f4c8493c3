// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emotion, intent, crisis and theme detection for the Solace companion.
//!
//! [`ContextAnalyzer`] turns one user message into a [`solace_core::TurnContext`]
//! by scoring fixed keyword vocabularies (see [`keywords`]).

pub mod classifier;
pub mod keywords;

pub use classifier::ContextAnalyzer;
