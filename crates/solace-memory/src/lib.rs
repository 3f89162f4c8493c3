// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation memory for the Solace companion.
//!
//! - Short-term: the most recent turns, in process only.
//! - Episodic: significant turns, capped and persisted.
//! - Long-term: cumulative emotion counters, persisted.

pub mod store;
pub mod types;

pub use store::{
    is_significant, write_record, MemoryStore, DEFAULT_EPISODIC_CAPACITY,
    DEFAULT_SHORT_TERM_CAPACITY,
};
pub use types::{Insights, LongTermProfile, PersistedMemory};
