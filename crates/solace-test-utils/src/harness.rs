// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles a complete agent with a temp-dir memory record,
//! a scripted random source and an optional scripted LLM backend. Provides
//! `send_message()` to drive the full pipeline in tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use solace_agent::Agent;
use solace_core::{ProviderAdapter, SolaceError};
use solace_dialogue::{ContentLibrary, ConversationHandler, ResponseGenerator};
use solace_memory::MemoryStore;

use crate::mock_provider::{FailingProvider, ScriptedProvider};
use crate::random::ScriptedRandom;

enum Backend {
    Rules,
    Scripted(Vec<String>),
    Failing,
}

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    backend: Backend,
    random: Vec<usize>,
    content: ContentLibrary,
    short_term_capacity: usize,
    episodic_capacity: usize,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            backend: Backend::Rules,
            random: vec![0],
            content: ContentLibrary::builtin(),
            short_term_capacity: solace_memory::DEFAULT_SHORT_TERM_CAPACITY,
            episodic_capacity: solace_memory::DEFAULT_EPISODIC_CAPACITY,
        }
    }

    /// Consult a scripted backend that replies with these texts in order.
    pub fn with_llm_responses(mut self, responses: Vec<String>) -> Self {
        self.backend = Backend::Scripted(responses);
        self
    }

    /// Consult a backend whose every call fails.
    pub fn with_failing_llm(mut self) -> Self {
        self.backend = Backend::Failing;
        self
    }

    /// Indices returned by the random source, cycled.
    pub fn with_random(mut self, sequence: Vec<usize>) -> Self {
        self.random = sequence;
        self
    }

    pub fn with_content(mut self, content: ContentLibrary) -> Self {
        self.content = content;
        self
    }

    pub fn with_capacities(mut self, short_term: usize, episodic: usize) -> Self {
        self.short_term_capacity = short_term;
        self.episodic_capacity = episodic;
        self
    }

    /// Build the harness with a fresh temp directory for the memory record.
    pub fn build(self) -> Result<TestHarness, SolaceError> {
        let temp_dir = tempfile::TempDir::new().map_err(SolaceError::storage)?;
        let memory_path = temp_dir.path().join("memories.json");

        let provider = match &self.backend {
            Backend::Scripted(responses) => {
                Some(Arc::new(ScriptedProvider::with_responses(responses.clone())))
            }
            _ => None,
        };

        let agent = assemble_agent(&self, provider.as_ref(), &memory_path);
        Ok(TestHarness {
            agent: Arc::new(agent),
            provider,
            memory_path,
            settings: self,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete agent running against a temporary memory record.
pub struct TestHarness {
    agent: Arc<Agent>,
    provider: Option<Arc<ScriptedProvider>>,
    memory_path: PathBuf,
    settings: TestHarnessBuilder,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Rule-based agent with default settings.
    pub fn new() -> Result<Self, SolaceError> {
        Self::builder().build()
    }

    /// Run one message through the full pipeline.
    pub async fn send_message(&self, text: &str) -> String {
        self.agent.interact(text).await
    }

    pub fn agent(&self) -> Arc<Agent> {
        self.agent.clone()
    }

    /// The scripted backend, when one was configured.
    pub fn provider(&self) -> Option<&ScriptedProvider> {
        self.provider.as_deref()
    }

    pub fn memory_path(&self) -> &Path {
        &self.memory_path
    }

    /// Replace the agent with a fresh one over the same memory record,
    /// as if the process had restarted.
    pub fn restart(&mut self) {
        self.agent = Arc::new(assemble_agent(
            &self.settings,
            self.provider.as_ref(),
            &self.memory_path,
        ));
    }
}

fn assemble_agent(
    settings: &TestHarnessBuilder,
    provider: Option<&Arc<ScriptedProvider>>,
    memory_path: &Path,
) -> Agent {
    let handler = ConversationHandler::new(
        settings.content.clone(),
        Arc::new(ScriptedRandom::new(settings.random.clone())),
    );
    let mut generator = ResponseGenerator::new(handler);
    match (&settings.backend, provider) {
        (Backend::Scripted(_), Some(provider)) => {
            let provider: Arc<dyn ProviderAdapter> = provider.clone();
            generator = generator.with_provider(provider);
        }
        (Backend::Failing, _) => {
            generator = generator.with_provider(Arc::new(FailingProvider::new()));
        }
        _ => {}
    }

    let memory = MemoryStore::open(
        memory_path,
        settings.short_term_capacity,
        settings.episodic_capacity,
    );
    Agent::new(memory, generator)
}
