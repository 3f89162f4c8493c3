// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Solace integration tests.
//!
//! Provides scripted collaborators and a test harness for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`ScriptedProvider`] - LLM backend with pre-configured replies
//! - [`FailingProvider`] - LLM backend that always errors
//! - [`ScriptedRandom`] - random source replaying fixed indices
//! - [`TestHarness`] - full agent over a temporary memory record

pub mod harness;
pub mod mock_provider;
pub mod random;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_provider::{FailingProvider, ScriptedProvider};
pub use random::ScriptedRandom;
