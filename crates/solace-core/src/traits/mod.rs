// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits shared across the Solace workspace.
//!
//! Every LLM backend implements [`ProviderAdapter`]; the response generator
//! draws its template choices through [`RandomSource`].

pub mod provider;
pub mod random;

pub use provider::ProviderAdapter;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
