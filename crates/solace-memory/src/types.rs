// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted record and insight types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use solace_core::{Emotion, Intent, Turn};

/// Cumulative per-emotion counters. Counts only ever increase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermProfile {
    #[serde(default)]
    pub emotions: BTreeMap<Emotion, u64>,
}

impl LongTermProfile {
    pub fn record(&mut self, emotion: Emotion) {
        *self.emotions.entry(emotion).or_insert(0) += 1;
    }

    /// Count for one emotion, zero if never seen.
    pub fn count(&self, emotion: Emotion) -> u64 {
        self.emotions.get(&emotion).copied().unwrap_or(0)
    }
}

/// The durable memory record, rewritten wholesale on every store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedMemory {
    #[serde(default)]
    pub episodic: Vec<Turn>,
    #[serde(default)]
    pub long_term: LongTermProfile,
}

/// Summary of the current session's short-term history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub total_interactions: usize,
    pub emotions_expressed: BTreeSet<Emotion>,
    pub topics_discussed: BTreeSet<Intent>,
    /// `"neutral"`, `"varied"`, or an emotion name.
    pub emotional_trend: String,
}
