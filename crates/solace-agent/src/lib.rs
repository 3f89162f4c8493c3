// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent orchestrator for the Solace companion.
//!
//! The [`Agent`] runs one pipeline per user message:
//! analyze -> recall -> generate -> store -> reply.
//!
//! A single instance is shared (behind `Arc`) by the HTTP gateway and the
//! interactive shell. The memory store sits behind an async mutex that is
//! never held across the LLM call.

pub mod backend;
pub mod mock;
pub mod shutdown;

use std::sync::Arc;

use solace_classifier::ContextAnalyzer;
use solace_config::SolaceConfig;
use solace_core::{SolaceError, ThreadRandom, TurnContext};
use solace_dialogue::content::{CHECK_IN_MESSAGE, FAREWELL_MESSAGE, GREETING_BANNER};
use solace_dialogue::{load_persona_prompt, ContentLibrary, ConversationHandler, ResponseGenerator};
use solace_memory::{write_record, Insights, MemoryStore};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub use backend::{resolve, BackendKind, LlmBackend};
pub use mock::MockBackend;
pub use shutdown::install_signal_handler;

/// The companion: classifier, memory and reply generator wired together.
pub struct Agent {
    analyzer: ContextAnalyzer,
    memory: Mutex<MemoryStore>,
    generator: ResponseGenerator,
    backend_name: String,
}

impl Agent {
    /// Assemble an agent from already-built parts.
    pub fn new(memory: MemoryStore, generator: ResponseGenerator) -> Self {
        let backend_name = generator.provider_name().unwrap_or("mock").to_string();
        Self {
            analyzer: ContextAnalyzer::new(),
            memory: Mutex::new(memory),
            generator,
            backend_name,
        }
    }

    /// Build an agent from configuration.
    ///
    /// Content files, the persona prompt and the memory record are loaded
    /// here. The mock backend means rule-based replies only; any other
    /// resolved backend is consulted before the rules.
    pub async fn from_config(config: &SolaceConfig) -> Self {
        let content = ContentLibrary::load(&config.content).await;
        let handler = ConversationHandler::new(content, Arc::new(ThreadRandom));
        let persona = load_persona_prompt(&config.agent).await;

        let mut generator = ResponseGenerator::new(handler)
            .with_persona_prompt(persona)
            .with_history_turns(config.llm.history_turns);

        let backend = resolve(&config.llm).await;
        if !backend.is_mock() {
            generator = generator.with_provider(Arc::new(backend));
        }

        let memory = MemoryStore::open(
            &config.memory.path,
            config.memory.short_term_capacity,
            config.memory.episodic_capacity,
        );

        let agent = Self::new(memory, generator);
        info!(
            agent_name = %config.agent.name,
            backend = %agent.backend_name,
            memory_path = %config.memory.path,
            "agent initialized"
        );
        agent
    }

    /// Reply to one user message and remember the exchange.
    pub async fn interact(&self, user_text: &str) -> String {
        self.interact_with_context(user_text).await.0
    }

    /// Like [`Agent::interact`], also returning the derived turn context.
    pub async fn interact_with_context(&self, user_text: &str) -> (String, TurnContext) {
        let context = self.analyzer.analyze(user_text);
        let memories = self.memory.lock().await.recall(user_text);

        let (reply, source) = self
            .generator
            .generate_with_source(user_text, &context, &memories)
            .await;
        debug!(
            intent = %context.intent,
            is_crisis = context.is_crisis,
            source = ?source,
            "reply generated"
        );

        // The lock stays held until the write lands so records are written in order.
        let mut memory = self.memory.lock().await;
        let snapshot = memory.remember(user_text, &reply, context.clone());
        let path = memory.path().to_path_buf();
        let written = tokio::task::spawn_blocking(move || write_record(&path, &snapshot))
            .await
            .unwrap_or_else(|e| Err(SolaceError::Internal(format!("memory write task failed: {e}"))));
        if let Err(e) = written {
            warn!(path = %memory.path().display(), error = %e, "failed to persist memory");
        }

        (reply, context)
    }

    /// A random meditation prompt.
    pub fn daily_meditation(&self) -> String {
        self.generator.handler().meditation()
    }

    /// Summary of the current session.
    pub async fn insights(&self) -> Insights {
        self.memory.lock().await.insights()
    }

    pub fn check_in(&self) -> &'static str {
        CHECK_IN_MESSAGE
    }

    pub fn farewell(&self) -> &'static str {
        FAREWELL_MESSAGE
    }

    pub fn greeting(&self) -> &'static str {
        GREETING_BANNER
    }

    /// Name of the backend consulted before the rules, or `mock`.
    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
