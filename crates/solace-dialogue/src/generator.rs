// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply generation with an optional LLM path and rule-based fallback.

use std::sync::Arc;

use solace_core::{ChatMessage, ProviderAdapter, Turn, TurnContext};
use tracing::{debug, warn};

use crate::content::PERSONA_PROMPT;
use crate::handler::ConversationHandler;

/// Default number of recalled turns included in an LLM prompt.
pub const DEFAULT_HISTORY_TURNS: usize = 5;

/// LLM replies at or below this many characters (after trimming) are discarded.
const MIN_REPLY_CHARS: usize = 10;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Crisis,
    Llm,
    Rules,
}

/// Produces the companion's reply for one analyzed message.
pub struct ResponseGenerator {
    handler: ConversationHandler,
    provider: Option<Arc<dyn ProviderAdapter>>,
    persona_prompt: String,
    history_turns: usize,
}

impl ResponseGenerator {
    /// Rule-based generator with no LLM backend.
    pub fn new(handler: ConversationHandler) -> Self {
        Self {
            handler,
            provider: None,
            persona_prompt: PERSONA_PROMPT.to_string(),
            history_turns: DEFAULT_HISTORY_TURNS,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ProviderAdapter>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_persona_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.persona_prompt = prompt.into();
        self
    }

    pub fn with_history_turns(mut self, turns: usize) -> Self {
        self.history_turns = turns;
        self
    }

    pub fn handler(&self) -> &ConversationHandler {
        &self.handler
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Generate a reply. Never fails: backend errors fall back to the rules.
    pub async fn generate(&self, user_text: &str, context: &TurnContext, memories: &[Turn]) -> String {
        self.generate_with_source(user_text, context, memories).await.0
    }

    /// Generate a reply and report which path produced it.
    pub async fn generate_with_source(
        &self,
        user_text: &str,
        context: &TurnContext,
        memories: &[Turn],
    ) -> (String, ReplySource) {
        if context.is_crisis {
            return (self.handler.respond(context), ReplySource::Crisis);
        }

        if let Some(provider) = &self.provider {
            let messages = self.build_messages(user_text, context, memories);
            match provider.generate(&messages).await {
                Ok(reply) => {
                    let trimmed = reply.trim();
                    if trimmed.chars().count() > MIN_REPLY_CHARS {
                        debug!(backend = provider.name(), chars = trimmed.len(), "using LLM reply");
                        return (trimmed.to_string(), ReplySource::Llm);
                    }
                    warn!(
                        backend = provider.name(),
                        chars = trimmed.chars().count(),
                        "LLM reply too short, falling back to rules"
                    );
                }
                Err(e) => {
                    warn!(
                        backend = provider.name(),
                        error = %e,
                        "LLM generation failed, falling back to rules"
                    );
                }
            }
        }

        (self.handler.respond(context), ReplySource::Rules)
    }

    /// Build the LLM conversation: persona system message with the detected
    /// emotion and intent, the most recent recalled turns, then the new text.
    pub fn build_messages(
        &self,
        user_text: &str,
        context: &TurnContext,
        memories: &[Turn],
    ) -> Vec<ChatMessage> {
        let mut system = self.persona_prompt.clone();
        if let Some(emotion) = context.emotion {
            system.push_str(&format!("\n\nThe user seems to be feeling: {emotion}"));
        }
        system.push_str(&format!("\nThe user's intent appears to be: {}", context.intent));

        let start = memories.len().saturating_sub(self.history_turns);
        let recent = &memories[start..];

        let mut messages = Vec::with_capacity(2 + recent.len() * 2);
        messages.push(ChatMessage::system(system));
        for turn in recent {
            messages.push(ChatMessage::user(turn.user.clone()));
            messages.push(ChatMessage::assistant(turn.agent.clone()));
        }
        messages.push(ChatMessage::user(user_text));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentLibrary, CRISIS_MESSAGE};
    use solace_core::{Emotion, Intent, Role};
    use solace_test_utils::{FailingProvider, ScriptedProvider, ScriptedRandom};

    fn handler() -> ConversationHandler {
        ConversationHandler::new(
            ContentLibrary::builtin(),
            Arc::new(ScriptedRandom::new(vec![0])),
        )
    }

    fn fear_context() -> TurnContext {
        TurnContext {
            emotion: Some(Emotion::Fear),
            intent: Intent::EmotionalSupport,
            ..TurnContext::default()
        }
    }

    fn turns(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| Turn::new(format!("user {i}"), format!("agent {i}"), TurnContext::default()))
            .collect()
    }

    #[tokio::test]
    async fn rules_only_without_provider() {
        let generator = ResponseGenerator::new(handler());
        let (reply, source) = generator
            .generate_with_source("I am scared", &fear_context(), &[])
            .await;
        assert_eq!(source, ReplySource::Rules);
        assert!(reply.starts_with("Fear is natural."));
    }

    #[tokio::test]
    async fn llm_reply_is_trimmed_and_used() {
        let provider = Arc::new(ScriptedProvider::with_responses(vec![
            "   Let us breathe together for a while.  \n".to_string(),
        ]));
        let generator = ResponseGenerator::new(handler()).with_provider(provider);
        let (reply, source) = generator
            .generate_with_source("I am scared", &fear_context(), &[])
            .await;
        assert_eq!(source, ReplySource::Llm);
        assert_eq!(reply, "Let us breathe together for a while.");
    }

    #[tokio::test]
    async fn short_llm_reply_falls_back() {
        // Exactly ten characters is not enough.
        let provider = Arc::new(ScriptedProvider::with_responses(vec!["  0123456789 ".to_string()]));
        let generator = ResponseGenerator::new(handler()).with_provider(provider);
        let (reply, source) = generator
            .generate_with_source("I am scared", &fear_context(), &[])
            .await;
        assert_eq!(source, ReplySource::Rules);
        assert!(reply.starts_with("Fear is natural."));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn provider_error_falls_back() {
        let generator =
            ResponseGenerator::new(handler()).with_provider(Arc::new(FailingProvider::new()));
        let (reply, source) = generator
            .generate_with_source("I am scared", &fear_context(), &[])
            .await;
        assert_eq!(source, ReplySource::Rules);
        assert!(reply.starts_with("Fear is natural."));
        assert!(logs_contain("LLM generation failed"));
    }

    #[tokio::test]
    async fn crisis_skips_the_provider() {
        let provider = Arc::new(ScriptedProvider::with_responses(vec![
            "A long and entirely unsuitable reply.".to_string(),
        ]));
        let generator = ResponseGenerator::new(handler()).with_provider(provider.clone());
        let context = TurnContext {
            is_crisis: true,
            ..fear_context()
        };
        let (reply, source) = generator.generate_with_source("...", &context, &[]).await;
        assert_eq!(source, ReplySource::Crisis);
        assert_eq!(reply, CRISIS_MESSAGE);
        assert_eq!(provider.call_count().await, 0);
    }

    #[test]
    fn prompt_includes_emotion_intent_and_last_five_turns() {
        let generator = ResponseGenerator::new(handler()).with_persona_prompt("Persona.");
        let messages = generator.build_messages("now", &fear_context(), &turns(7));

        assert_eq!(messages.len(), 1 + 5 * 2 + 1);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(
            messages[0].content,
            "Persona.\n\nThe user seems to be feeling: fear\nThe user's intent appears to be: emotional_support"
        );
        assert_eq!(messages[1], ChatMessage::user("user 2"));
        assert_eq!(messages[2], ChatMessage::assistant("agent 2"));
        assert_eq!(messages[10], ChatMessage::assistant("agent 6"));
        assert_eq!(messages[11], ChatMessage::user("now"));
    }

    #[test]
    fn prompt_omits_missing_emotion() {
        let generator = ResponseGenerator::new(handler()).with_persona_prompt("P");
        let messages = generator.build_messages("hi", &TurnContext::default(), &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0].content,
            "P\nThe user's intent appears to be: general_conversation"
        );
    }

    #[tokio::test]
    async fn provider_receives_built_messages() {
        let provider = Arc::new(ScriptedProvider::with_responses(vec![
            "A thoughtful and sufficiently long reply.".to_string(),
        ]));
        let generator = ResponseGenerator::new(handler())
            .with_provider(provider.clone())
            .with_history_turns(1);
        generator.generate("and now?", &fear_context(), &turns(3)).await;

        let seen = provider.last_request().await.unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1].content, "user 2");
        assert_eq!(seen[3].content, "and now?");
    }
}
