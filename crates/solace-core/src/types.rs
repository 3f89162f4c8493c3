// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation types shared by the classifier, memory store, and generator.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Emotion label detected in user text.
///
/// Declaration order is the tie-break order used by the classifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Peace,
    Love,
    Sadness,
    Fear,
    Anger,
    Confusion,
    Gratitude,
}

/// Conversational intent of a user message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    MeditationRequest,
    SpiritualQuestion,
    EmotionalSupport,
    Gratitude,
    WisdomSeeking,
    /// Never produced by keyword scoring; recognized by dispatch and significance.
    CrisisSupport,
    #[default]
    GeneralConversation,
}

/// Thematic label used to flavor general-conversation replies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Mindfulness,
    Compassion,
    Impermanence,
    Suffering,
    Peace,
    Connection,
}

/// Signals derived from a single user message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnContext {
    /// Dominant emotion, if any keyword matched.
    pub emotion: Option<Emotion>,
    /// Dominant intent; `general_conversation` when nothing matched.
    pub intent: Intent,
    /// True when any crisis phrase appears in the text.
    pub is_crisis: bool,
    /// Every theme with at least one matching keyword.
    #[serde(default)]
    pub themes: BTreeSet<Theme>,
    /// Character count of the original user text.
    #[serde(default)]
    pub message_length: usize,
}

/// One user/agent exchange plus its derived context. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub agent: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub context: TurnContext,
}

impl Turn {
    /// Creates a turn stamped with the current time.
    pub fn new(user: impl Into<String>, agent: impl Into<String>, context: TurnContext) -> Self {
        Self {
            user: user.into(),
            agent: agent.into(),
            timestamp: Utc::now(),
            context,
        }
    }
}

/// Speaker role in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message sent to an LLM backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Timestamps are written as RFC 3339. Naive ISO-8601 values (no offset)
/// are accepted on read and taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
