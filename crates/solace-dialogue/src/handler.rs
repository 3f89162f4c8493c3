// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based reply selection.
//!
//! A single dispatch step on (crisis, intent, emotion, themes). The crisis
//! branch always wins.

use std::sync::Arc;

use solace_core::{Emotion, Intent, RandomSource, Theme, ThreadRandom, TurnContext};
use tracing::debug;

use crate::content::{ContentLibrary, CRISIS_MESSAGE};

pub const GRATITUDE_REPLY: &str = "Gratitude is a powerful practice. \
Taking time to appreciate what we have cultivates inner wealth. \
What are you most grateful for today?";

pub const SPIRITUAL_REPLY: &str = "That's a profound question. \
Spiritual wisdom often comes from many traditions. \
What draws you to this question? Let's explore it together.";

pub const LISTENING_REPLY: &str = "I'm here to listen and reflect with you. Tell me more.";

const WISDOM_FOLLOW_UP: &str = "\n\nWhat are your thoughts on this?";

/// Opening line of a meditation reply for emotions that have one.
fn meditation_opener(emotion: Option<Emotion>) -> Option<&'static str> {
    match emotion? {
        Emotion::Sadness => {
            Some("Allow yourself this moment of stillness. Your feelings are valid...")
        }
        Emotion::Peace => Some("Continue nurturing this peaceful state. Notice the stillness..."),
        _ => None,
    }
}

fn emotional_support(emotion: Option<Emotion>) -> &'static str {
    match emotion {
        Some(Emotion::Sadness) => {
            "I hear you. It's okay to feel sad. Would you like to talk about what's on your heart?"
        }
        Some(Emotion::Fear) => {
            "Fear is natural. You're not alone. Let's take this one breath at a time together."
        }
        Some(Emotion::Anger) => "I see your frustration. It's valid to feel what you feel.",
        Some(Emotion::Joy) => "I'm glad you're feeling joyful! What has brought this happiness?",
        _ => "I'm here to listen. What's on your mind?",
    }
}

fn theme_reply(context: &TurnContext) -> &'static str {
    if context.themes.contains(&Theme::Mindfulness) {
        "I sense you're interested in mindfulness. How has your practice been?"
    } else if context.themes.contains(&Theme::Compassion) {
        "Compassion is a beautiful quality. How do you cultivate it in your life?"
    } else if context.themes.contains(&Theme::Peace) {
        "Peace is within reach. What helps you find stillness?"
    } else {
        LISTENING_REPLY
    }
}

/// Picks replies from fixed templates and the content pools.
#[derive(Clone)]
pub struct ConversationHandler {
    content: ContentLibrary,
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for ConversationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationHandler")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

impl Default for ConversationHandler {
    fn default() -> Self {
        Self::new(ContentLibrary::builtin(), Arc::new(ThreadRandom))
    }
}

impl ConversationHandler {
    pub fn new(content: ContentLibrary, random: Arc<dyn RandomSource>) -> Self {
        Self { content, random }
    }

    /// Select the rule-based reply for an analyzed message.
    pub fn respond(&self, context: &TurnContext) -> String {
        if context.is_crisis {
            debug!("crisis flag set, returning crisis resources");
            return CRISIS_MESSAGE.to_string();
        }

        match context.intent {
            Intent::CrisisSupport => CRISIS_MESSAGE.to_string(),
            Intent::MeditationRequest => match meditation_opener(context.emotion) {
                Some(opener) => opener.to_string(),
                None => self.meditation(),
            },
            Intent::EmotionalSupport => emotional_support(context.emotion).to_string(),
            Intent::Gratitude => GRATITUDE_REPLY.to_string(),
            Intent::WisdomSeeking => format!("{}{WISDOM_FOLLOW_UP}", self.wisdom()),
            Intent::SpiritualQuestion => SPIRITUAL_REPLY.to_string(),
            Intent::GeneralConversation => theme_reply(context).to_string(),
        }
    }

    /// A uniformly random meditation prompt.
    pub fn meditation(&self) -> String {
        pick(self.content.meditations(), self.random.as_ref())
    }

    /// A uniformly random wisdom quote.
    pub fn wisdom(&self) -> String {
        pick(self.content.wisdom(), self.random.as_ref())
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }
}

fn pick(pool: &[String], random: &dyn RandomSource) -> String {
    // Pools are never empty; a source may still return an index past the end.
    let idx = random.pick(pool.len()).min(pool.len().saturating_sub(1));
    pool.get(idx).cloned().unwrap_or_default()
}
