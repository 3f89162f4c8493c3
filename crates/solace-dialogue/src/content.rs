// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed companion texts and the meditation/wisdom content pools.

use std::path::Path;

use serde::Deserialize;
use solace_config::model::{AgentConfig, ContentConfig};
use tracing::{info, warn};

/// Persona prompt sent as the system message to LLM backends.
pub const PERSONA_PROMPT: &str = "You are a compassionate spiritual guide and mindfulness companion. Your purpose is to:

1. Listen deeply and reflect thoughtfully
2. Offer gentle guidance without being prescriptive
3. Draw from various spiritual traditions and philosophical perspectives
4. Help users explore their inner world with curiosity and kindness
5. Encourage mindfulness, self-reflection, and conscious living
6. Be inclusive and respectful of diverse beliefs and backgrounds

You are NOT:
- A religious authority
- A medical or psychological professional
- Someone who gives absolute answers

Your tone: Warm, contemplative, wise but humble, peaceful.

Remember: You are here to guide and support, not to tell people what to believe or do. Help them find their own answers.";

/// Reply for any message that raises the crisis flag.
pub const CRISIS_MESSAGE: &str = "I hear you, and I want you to know that your life matters. \
What you're feeling is important, and you don't have to face this alone. \
Please consider reaching out to a crisis helpline or trusted person: \
National Suicide Prevention Lifeline: 988 (US) \
I'm here to support you, but please also connect with professional help.";

pub const CHECK_IN_MESSAGE: &str =
    "How are you feeling today? Take a moment to check in with yourself.";

pub const FAREWELL_MESSAGE: &str = "May peace fill your heart and guide your steps. \
Remember: The journey inward is the most sacred adventure. \
I'll be here whenever you wish to continue our conversation.";

/// Banner shown when an interactive session opens.
pub const GREETING_BANNER: &str = "🌟 Welcome, dear seeker! 🌟

I am your compassionate companion on the journey within — here to support your
spiritual growth, offer gentle guidance, and walk alongside you in mindful exploration.

Take a deep breath... and share whatever is on your heart.
I'm here to listen without judgment. 🙏";

/// Banner shown when an interactive session closes.
pub const FAREWELL_BANNER: &str = "May peace fill your heart and guide your steps.

Remember: The journey inward is the most sacred adventure.
I'll be here whenever you wish to continue our conversation.

Until we meet again, dear friend. 🌸";

/// Shown when an interactive session is interrupted.
pub const INTERRUPT_MESSAGE: &str = "Take care on your spiritual journey. 🙏";

const BUILTIN_MEDITATIONS: &[&str] = &[
    "Find a comfortable seated position. Close your eyes and take three deep breaths...",
    "Bring your attention to the present moment. What do you hear? What do you feel?",
    "Visualize a warm light filling your heart space, spreading warmth through your body...",
    "Notice your thoughts without judgment. Let them pass like clouds in the sky...",
    "Focus on your breath. Inhale peace, exhale tension. Repeat...",
];

const BUILTIN_WISDOM: &[&str] = &[
    "The journey of a thousand miles begins with a single step. — Lao Tzu",
    "Peace comes from within. Do not seek it without. — Buddha",
    "Be the change you wish to see in the world. — Gandhi",
    "In the end, it's not the years in your life that count. It's the life in your years. — Lincoln",
    "The only way to do great work is to love what you do. — Jobs",
];

#[derive(Debug, Deserialize)]
struct QuotesFile {
    #[serde(default)]
    quotes: Vec<String>,
}

/// Meditation prompts and wisdom quotes available for random selection.
///
/// Both pools are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLibrary {
    meditations: Vec<String>,
    wisdom: Vec<String>,
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentLibrary {
    /// The built-in pools.
    pub fn builtin() -> Self {
        Self {
            meditations: BUILTIN_MEDITATIONS.iter().map(|s| s.to_string()).collect(),
            wisdom: BUILTIN_WISDOM.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a library from explicit pools. An empty pool is replaced by its built-in.
    pub fn new(meditations: Vec<String>, wisdom: Vec<String>) -> Self {
        let builtin = Self::builtin();
        Self {
            meditations: if meditations.is_empty() {
                builtin.meditations
            } else {
                meditations
            },
            wisdom: if wisdom.is_empty() {
                builtin.wisdom
            } else {
                wisdom
            },
        }
    }

    /// Load the pools named in config, falling back to the built-ins per pool.
    pub async fn load(config: &ContentConfig) -> Self {
        let meditations = match &config.meditation_prompts_file {
            Some(path) => load_meditations(Path::new(path)).await,
            None => Vec::new(),
        };
        let wisdom = match &config.wisdom_quotes_file {
            Some(path) => load_wisdom(Path::new(path)).await,
            None => Vec::new(),
        };
        Self::new(meditations, wisdom)
    }

    pub fn meditations(&self) -> &[String] {
        &self.meditations
    }

    pub fn wisdom(&self) -> &[String] {
        &self.wisdom
    }
}

/// Parse a markdown prompt file: entries are separated by `---`, blanks dropped.
pub fn parse_meditations(content: &str) -> Vec<String> {
    content
        .split("---")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

async fn load_meditations(path: &Path) -> Vec<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let prompts = parse_meditations(&content);
            if prompts.is_empty() {
                warn!(path = %path.display(), "meditation file has no prompts, using built-ins");
            } else {
                info!(path = %path.display(), count = prompts.len(), "loaded meditation prompts");
            }
            prompts
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read meditation file, using built-ins");
            Vec::new()
        }
    }
}

async fn load_wisdom(path: &Path) -> Vec<String> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read quotes file, using built-ins");
            return Vec::new();
        }
    };
    match serde_json::from_str::<QuotesFile>(&raw) {
        Ok(file) => {
            let quotes: Vec<String> = file
                .quotes
                .into_iter()
                .filter(|q| !q.trim().is_empty())
                .collect();
            if quotes.is_empty() {
                warn!(path = %path.display(), "quotes file has no quotes, using built-ins");
            } else {
                info!(path = %path.display(), count = quotes.len(), "loaded wisdom quotes");
            }
            quotes
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse quotes file, using built-ins");
            Vec::new()
        }
    }
}

/// Loads the persona prompt following priority: file > inline > built-in.
pub async fn load_persona_prompt(agent: &AgentConfig) -> String {
    if let Some(file_path) = &agent.system_prompt_file {
        match tokio::fs::read_to_string(file_path).await {
            Ok(content) => {
                let trimmed = content.trim();
                if !trimmed.is_empty() {
                    info!(path = %file_path, "loaded persona prompt from file");
                    return trimmed.to_string();
                }
            }
            Err(e) => {
                warn!(
                    path = %file_path,
                    error = %e,
                    "failed to read persona prompt file, falling back"
                );
            }
        }
    }

    if let Some(prompt) = &agent.system_prompt {
        if !prompt.trim().is_empty() {
            return prompt.clone();
        }
    }

    PERSONA_PROMPT.to_string()
}
