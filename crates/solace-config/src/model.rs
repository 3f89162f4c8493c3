// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Solace companion.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Solace configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolaceConfig {
    /// Companion identity and persona settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Language model backend settings.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Conversation memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Meditation prompt and wisdom quote sources.
    #[serde(default)]
    pub content: ContentConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl SolaceConfig {
    /// Returns a copy safe for display, with secrets masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.llm.api_key.is_some() {
            copy.llm.api_key = Some("********".to_string());
        }
        copy
    }
}

/// Companion identity and persona configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the companion.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline persona prompt. Overridden by `system_prompt_file` if both set.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Path to a markdown file containing the persona prompt.
    #[serde(default)]
    pub system_prompt_file: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: None,
            system_prompt_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "solace".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Language model backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Backend name: `mock`, `ollama`, `openai` or `anthropic`.
    /// Unknown names fall back to `mock` at startup.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Model identifier. `None` uses the backend's default model.
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL of the local Ollama server.
    #[serde(default = "default_ollama_base_url")]
    pub ollama_base_url: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Base URL of the Anthropic API.
    #[serde(default = "default_anthropic_base_url")]
    pub anthropic_base_url: String,

    /// API key for cloud backends. Falls back to the backend's env var.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout for a single generation call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Number of recalled turns included in the prompt.
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model: None,
            ollama_base_url: default_ollama_base_url(),
            openai_base_url: default_openai_base_url(),
            anthropic_base_url: default_anthropic_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            history_turns: default_history_turns(),
        }
    }
}

impl LlmConfig {
    /// Returns the configured API key, or the value of `env_var` when the
    /// config key is unset or empty. Empty env values count as missing.
    pub fn resolve_api_key(&self, env_var: &str) -> Option<String> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Some(key.to_string()),
            _ => std::env::var(env_var).ok().filter(|key| !key.is_empty()),
        }
    }
}

fn default_backend() -> String {
    "mock".to_string()
}

fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_history_turns() -> usize {
    5
}

/// Conversation memory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Path of the JSON record holding episodic and long-term memory.
    #[serde(default = "default_memory_path")]
    pub path: String,

    /// Number of recent turns kept in short-term memory.
    #[serde(default = "default_short_term_capacity")]
    pub short_term_capacity: usize,

    /// Maximum number of significant turns kept in the episodic log.
    #[serde(default = "default_episodic_capacity")]
    pub episodic_capacity: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_memory_path(),
            short_term_capacity: default_short_term_capacity(),
            episodic_capacity: default_episodic_capacity(),
        }
    }
}

fn default_memory_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("solace").join("memories.json"))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "memories.json".to_string())
}

fn default_short_term_capacity() -> usize {
    20
}

fn default_episodic_capacity() -> usize {
    50
}

/// Content pool overrides. Unset paths use the built-in pools.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Markdown file of meditation prompts separated by `---` lines.
    #[serde(default)]
    pub meditation_prompts_file: Option<String>,

    /// JSON file of the form `{"quotes": [...]}`.
    #[serde(default)]
    pub wisdom_quotes_file: Option<String>,
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    8000
}
