// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded conversation memory with write-through JSON persistence.
//!
//! Short-term history lives only in process. The episodic log and the
//! long-term profile are written to a single JSON record after every store.

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use solace_core::{Emotion, Intent, SolaceError, Turn, TurnContext};
use tracing::{debug, warn};

use crate::types::{Insights, LongTermProfile, PersistedMemory};

/// Default number of turns kept in short-term memory.
pub const DEFAULT_SHORT_TERM_CAPACITY: usize = 20;

/// Default number of significant turns kept in the episodic log.
pub const DEFAULT_EPISODIC_CAPACITY: usize = 50;

/// Number of consecutive identical emotions that define a trend.
const TREND_WINDOW: usize = 3;

/// Conversation memory for a single companion instance.
#[derive(Debug)]
pub struct MemoryStore {
    path: PathBuf,
    short_term: VecDeque<Turn>,
    short_term_capacity: usize,
    episodic: Vec<Turn>,
    episodic_capacity: usize,
    long_term: LongTermProfile,
}

impl MemoryStore {
    /// Open the store backed by the record at `path`.
    ///
    /// A missing, unreadable or malformed record is logged and treated as
    /// empty. Short-term memory always starts empty. Capacities below one
    /// are raised to one.
    pub fn open(
        path: impl Into<PathBuf>,
        short_term_capacity: usize,
        episodic_capacity: usize,
    ) -> Self {
        let path = path.into();
        let short_term_capacity = short_term_capacity.max(1);
        let episodic_capacity = episodic_capacity.max(1);

        let PersistedMemory {
            mut episodic,
            long_term,
        } = load_record(&path);
        trim_front(&mut episodic, episodic_capacity);

        debug!(
            path = %path.display(),
            episodic = episodic.len(),
            "memory store opened"
        );

        Self {
            path,
            short_term: VecDeque::with_capacity(short_term_capacity),
            short_term_capacity,
            episodic,
            episodic_capacity,
            long_term,
        }
    }

    /// Open with the default capacities.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self::open(path, DEFAULT_SHORT_TERM_CAPACITY, DEFAULT_EPISODIC_CAPACITY)
    }

    /// Record a completed turn and persist the durable snapshot.
    ///
    /// In-memory state is always updated. A persistence failure is returned
    /// after the update so the caller can decide how loudly to report it.
    pub fn store(
        &mut self,
        user_text: &str,
        agent_text: &str,
        context: TurnContext,
    ) -> Result<(), SolaceError> {
        let snapshot = self.remember(user_text, agent_text, context);
        write_record(&self.path, &snapshot)
    }

    /// Record a completed turn in memory only and return the durable
    /// snapshot to be written with [`write_record`].
    pub fn remember(
        &mut self,
        user_text: &str,
        agent_text: &str,
        context: TurnContext,
    ) -> PersistedMemory {
        let turn = Turn::new(user_text, agent_text, context);

        if is_significant(&turn.context) {
            self.episodic.push(turn.clone());
            trim_front(&mut self.episodic, self.episodic_capacity);
        }

        if let Some(emotion) = turn.context.emotion {
            self.long_term.record(emotion);
        }

        if self.short_term.len() == self.short_term_capacity {
            self.short_term.pop_front();
        }
        self.short_term.push_back(turn);

        self.snapshot()
    }

    /// The durable part of the store: episodic log and long-term profile.
    pub fn snapshot(&self) -> PersistedMemory {
        PersistedMemory {
            episodic: self.episodic.clone(),
            long_term: self.long_term.clone(),
        }
    }

    /// Recent conversation history, oldest first.
    ///
    /// The query is accepted for interface stability; every short-term
    /// turn is returned regardless of its content.
    pub fn recall(&self, _query: &str) -> Vec<Turn> {
        self.short_term.iter().cloned().collect()
    }

    /// Summarize the short-term history.
    pub fn insights(&self) -> Insights {
        let emotions_expressed: BTreeSet<Emotion> = self
            .short_term
            .iter()
            .filter_map(|t| t.context.emotion)
            .collect();
        let topics_discussed: BTreeSet<Intent> =
            self.short_term.iter().map(|t| t.context.intent).collect();

        Insights {
            total_interactions: self.short_term.len(),
            emotions_expressed,
            topics_discussed,
            emotional_trend: self.emotional_trend(),
        }
    }

    pub fn episodic(&self) -> &[Turn] {
        &self.episodic
    }

    pub fn long_term(&self) -> &LongTermProfile {
        &self.long_term
    }

    pub fn short_term_len(&self) -> usize {
        self.short_term.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compared by turn position: a turn without an emotion breaks a run.
    fn emotional_trend(&self) -> String {
        let recent: Vec<Option<Emotion>> =
            self.short_term.iter().map(|t| t.context.emotion).collect();

        if recent.iter().all(Option::is_none) {
            return "neutral".to_string();
        }

        if recent.len() >= TREND_WINDOW {
            let tail = &recent[recent.len() - TREND_WINDOW..];
            if let Some(first) = tail[0] {
                if tail.iter().all(|e| *e == Some(first)) {
                    return first.to_string();
                }
            }
        }

        "varied".to_string()
    }
}

/// Write a snapshot to `path`, creating parent directories as needed.
///
/// Writes to `<path>.tmp` first and renames it into place. Blocking; async
/// callers run it on the blocking pool.
pub fn write_record(path: &Path, snapshot: &PersistedMemory) -> Result<(), SolaceError> {
    let raw = serde_json::to_string_pretty(snapshot).map_err(SolaceError::storage)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(SolaceError::storage)?;
        }
    }

    let mut tmp = path.to_path_buf().into_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, raw).map_err(SolaceError::storage)?;
    std::fs::rename(&tmp, path).map_err(SolaceError::storage)?;
    debug!(path = %path.display(), episodic = snapshot.episodic.len(), "memory record written");
    Ok(())
}

/// A turn is kept in the episodic log when it signals crisis, a strong
/// emotion, or a spiritual or meditative exchange.
pub fn is_significant(context: &TurnContext) -> bool {
    context.is_crisis
        || matches!(
            context.emotion,
            Some(Emotion::Joy | Emotion::Sadness | Emotion::Fear)
        )
        || matches!(
            context.intent,
            Intent::SpiritualQuestion | Intent::MeditationRequest | Intent::CrisisSupport
        )
}

fn trim_front<T>(items: &mut Vec<T>, cap: usize) {
    if items.len() > cap {
        let excess = items.len() - cap;
        items.drain(..excess);
    }
}

fn load_record(path: &Path) -> PersistedMemory {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return PersistedMemory::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read memory record, starting empty");
            return PersistedMemory::default();
        }
    };

    if raw.trim().is_empty() {
        return PersistedMemory::default();
    }

    match serde_json::from_str(&raw) {
        Ok(record) => record,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse memory record, starting empty");
            PersistedMemory::default()
        }
    }
}
