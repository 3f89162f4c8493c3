// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed keyword vocabularies.
//!
//! Table order is significant: on equal scores the earlier label wins.
//! Entries are matched as lowercase substrings, so `"care"` also fires on
//! `"scared"` and a repeated keyword counts once per repetition.

use solace_core::{Emotion, Intent, Theme};

/// Emotion vocabularies in tie-break order.
pub const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (Emotion::Joy, &["happy", "joyful", "grateful", "blessed", "excited"]),
    (Emotion::Peace, &["calm", "peaceful", "serene", "tranquil", "at ease"]),
    (Emotion::Love, &["love", "compassion", "care", "kindness", "heart"]),
    (Emotion::Sadness, &["sad", "grief", "loss", "lonely", "empty"]),
    (Emotion::Fear, &["afraid", "anxious", "worried", "scared", "nervous"]),
    (Emotion::Anger, &["angry", "frustrated", "annoyed", "irritated", "upset"]),
    (Emotion::Confusion, &["confused", "lost", "uncertain", "unsure", "unclear"]),
    (Emotion::Gratitude, &["thankful", "grateful", "appreciate", "blessed"]),
];

/// Intent vocabularies in tie-break order. No match means general conversation.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::MeditationRequest,
        &["meditate", "meditation", "breathing", "breathe", "mindfulness", "practice", "guided"],
    ),
    (
        Intent::SpiritualQuestion,
        &["meaning", "purpose", "life", "death", "soul", "spiritual", "enlightenment", "awakening"],
    ),
    (
        Intent::EmotionalSupport,
        &[
            "sad", "angry", "lonely", "hurt", "pain", "scared", "anxious", "worried", "depressed",
            "feel",
        ],
    ),
    (Intent::Gratitude, &["thankful", "grateful", "appreciate", "blessed"]),
    (
        Intent::WisdomSeeking,
        &["advice", "guidance", "wisdom", "teach me", "learn", "understand"],
    ),
];

/// Phrases that raise the crisis flag.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "hurt myself",
    "self-harm",
    "cutting myself",
    "want to die",
];

/// Theme vocabularies. `"change"` is listed twice and `" impermanent"`
/// carries a leading space; both are kept as-is.
pub const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (Theme::Mindfulness, &["present", "now", "aware", "attention", "focus"]),
    (Theme::Compassion, &["kindness", "love", "care", "forgiveness"]),
    (Theme::Impermanence, &["change", "change", " impermanent", "transient"]),
    (Theme::Suffering, &["suffer", "struggle", "difficult", "hard"]),
    (Theme::Peace, &["peace", "calm", "serene", "quiet", "still"]),
    (Theme::Connection, &["connect", "together", "unity", "oneness"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::Emotion;
    use std::collections::HashSet;

    #[test]
    fn every_emotion_has_a_vocabulary() {
        let labels: HashSet<Emotion> = EMOTION_KEYWORDS.iter().map(|(e, _)| *e).collect();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn intent_tables_never_name_reserved_intents() {
        assert!(
            INTENT_KEYWORDS
                .iter()
                .all(|(i, _)| !matches!(i, Intent::CrisisSupport | Intent::GeneralConversation))
        );
    }

    #[test]
    fn keywords_are_lowercase() {
        let all = EMOTION_KEYWORDS
            .iter()
            .flat_map(|(_, k)| k.iter())
            .chain(INTENT_KEYWORDS.iter().flat_map(|(_, k)| k.iter()))
            .chain(THEME_KEYWORDS.iter().flat_map(|(_, k)| k.iter()))
            .chain(CRISIS_PHRASES.iter());
        for kw in all {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }
}
