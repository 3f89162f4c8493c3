// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic keyword-reply backend.

use async_trait::async_trait;
use solace_core::{ChatMessage, ProviderAdapter, Role, SolaceError};

pub const MEDITATION_REPLY: &str = "Take a moment to breathe deeply. Find a comfortable position and close your eyes. \
With each breath, feel yourself becoming more present and at peace...";

pub const SADNESS_REPLY: &str = "I hear you. It's okay to feel what you're feeling. \
Remember that you're not alone on this journey. Would you like to talk about what's on your heart?";

pub const GRATITUDE_REPLY: &str = "Gratitude is a beautiful practice. \
Taking time to appreciate what we have cultivates inner wealth. What are you most grateful for today?";

pub const FRUSTRATION_REPLY: &str = "I see your frustration. It's valid to feel what you feel. \
Sometimes taking a step back and breathing can help us find clarity.";

pub const WISDOM_REPLY: &str = "The greatest wisdom often comes from within. \
Trust your inner guidance. What does your heart tell you?";

pub const DEFAULT_REPLY: &str = "I'm here to listen and reflect with you. \
Take your time to share what's on your mind. I'm here to support you on your spiritual journey.";

/// Ordered keyword table; the first row with a matching keyword wins.
const REPLIES: &[(&[&str], &str)] = &[
    (&["meditat"], MEDITATION_REPLY),
    (&["sad", "lonely"], SADNESS_REPLY),
    (&["grateful", "thankful"], GRATITUDE_REPLY),
    (&["angry", "frustrated"], FRUSTRATION_REPLY),
    (&["wisdom", "advice"], WISDOM_REPLY),
];

/// Backend that answers from a fixed keyword table and never fails.
///
/// Only the latest user message is inspected, so recalled history in the
/// prompt does not influence the reply.
///
/// Interface stand-in: [`crate::Agent::from_config`] treats a resolved mock
/// backend as "no LLM" and never calls it. Library users and tests can
/// attach it explicitly with `ResponseGenerator::with_provider`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBackend;

impl MockBackend {
    /// The canned reply for a single piece of user text.
    pub fn reply_for(text: &str) -> &'static str {
        let lower = text.to_lowercase();
        REPLIES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, reply)| *reply)
            .unwrap_or(DEFAULT_REPLY)
    }
}

#[async_trait]
impl ProviderAdapter for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SolaceError> {
        let latest = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        Ok(Self::reply_for(latest).to_string())
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_rows_in_order() {
        assert_eq!(MockBackend::reply_for("Can we MEDITATE?"), MEDITATION_REPLY);
        assert_eq!(MockBackend::reply_for("I feel lonely"), SADNESS_REPLY);
        assert_eq!(MockBackend::reply_for("so thankful"), GRATITUDE_REPLY);
        assert_eq!(MockBackend::reply_for("I'm frustrated"), FRUSTRATION_REPLY);
        assert_eq!(MockBackend::reply_for("any advice?"), WISDOM_REPLY);
        assert_eq!(MockBackend::reply_for("hello"), DEFAULT_REPLY);
    }

    #[test]
    fn earlier_row_wins_when_several_match() {
        assert_eq!(
            MockBackend::reply_for("sad but grateful, want to meditate"),
            MEDITATION_REPLY
        );
    }

    #[tokio::test]
    async fn uses_latest_user_message() {
        let messages = [
            ChatMessage::system("persona mentions meditation"),
            ChatMessage::user("I was sad yesterday"),
            ChatMessage::assistant("I hear you."),
            ChatMessage::user("Today I'm grateful"),
        ];
        let reply = MockBackend.generate(&messages).await.unwrap();
        assert_eq!(reply, GRATITUDE_REPLY);
    }

    #[tokio::test]
    async fn no_user_message_gives_default() {
        let reply = MockBackend.generate(&[]).await.unwrap();
        assert_eq!(reply, DEFAULT_REPLY);
        assert!(MockBackend.is_available().await);
    }
}
