// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context analysis of a single user message.
//!
//! Scores fixed vocabularies by substring membership. No LLM pre-call,
//! no network, no state between calls.

use std::collections::BTreeSet;

use solace_core::{Emotion, Intent, Theme, TurnContext};
use tracing::debug;

use crate::keywords::{CRISIS_PHRASES, EMOTION_KEYWORDS, INTENT_KEYWORDS, THEME_KEYWORDS};

/// Stateless emotion/intent/crisis/theme detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAnalyzer;

impl ContextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a user message. Infallible; empty input yields the neutral context.
    pub fn analyze(&self, text: &str) -> TurnContext {
        let lower = text.to_lowercase();

        let context = TurnContext {
            emotion: Self::detect_emotion(&lower),
            intent: Self::detect_intent(&lower),
            is_crisis: Self::detect_crisis(&lower),
            themes: Self::detect_themes(&lower),
            message_length: text.chars().count(),
        };

        debug!(
            emotion = ?context.emotion,
            intent = %context.intent,
            is_crisis = context.is_crisis,
            themes = context.themes.len(),
            "message analyzed"
        );

        context
    }

    fn detect_emotion(lower: &str) -> Option<Emotion> {
        best_label(lower, EMOTION_KEYWORDS)
    }

    fn detect_intent(lower: &str) -> Intent {
        best_label(lower, INTENT_KEYWORDS).unwrap_or_default()
    }

    fn detect_crisis(lower: &str) -> bool {
        CRISIS_PHRASES.iter().any(|p| lower.contains(p))
    }

    fn detect_themes(lower: &str) -> BTreeSet<Theme> {
        THEME_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(theme, _)| *theme)
            .collect()
    }
}

/// Number of table keywords contained in `lower`.
fn score(lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lower.contains(*k)).count()
}

/// Highest nonzero score wins; the first label in table order wins ties.
fn best_label<L: Copy>(lower: &str, table: &[(L, &[&str])]) -> Option<L> {
    let mut best: Option<(L, usize)> = None;
    for (label, keywords) in table {
        let s = score(lower, keywords);
        if s == 0 {
            continue;
        }
        match best {
            Some((_, top)) if top >= s => {}
            _ => best = Some((*label, s)),
        }
    }
    best.map(|(label, _)| label)
}
