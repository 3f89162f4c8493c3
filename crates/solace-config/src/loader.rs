// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./solace.toml` > `~/.config/solace/solace.toml` > `/etc/solace/solace.toml`
//! with environment variable overrides via `SOLACE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use tracing::debug;

use crate::model::SolaceConfig;

/// Config sections addressable from `SOLACE_<SECTION>_<KEY>` variables.
const ENV_SECTIONS: &[&str] = &["agent", "llm", "memory", "content", "gateway"];

/// Path of the system-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/solace/solace.toml";

/// File name looked up in the working directory and the XDG config dir.
pub const LOCAL_CONFIG_FILE: &str = "solace.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/solace/solace.toml` (system-wide)
/// 3. `~/.config/solace/solace.toml` (user XDG config)
/// 4. `./solace.toml` (local directory)
/// 5. `SOLACE_*` environment variables
pub fn load_config() -> Result<SolaceConfig, figment::Error> {
    debug!(
        system = SYSTEM_CONFIG_PATH,
        user = ?user_config_path(),
        local = LOCAL_CONFIG_FILE,
        "merging config layers"
    );
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SolaceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SolaceConfig, figment::Error> {
    debug!(path = %path.display(), exists = path.exists(), "loading config file");
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for standard config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// The per-user config file location, if a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("solace").join(LOCAL_CONFIG_FILE))
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` so keys containing
/// underscores survive: `SOLACE_LLM_API_KEY` maps to `llm.api_key`,
/// not `llm.api.key`.
fn env_provider() -> Env {
    Env::prefixed("SOLACE_").map(|key| map_env_key(&key.as_str().to_ascii_lowercase()).into())
}

/// Maps a lowercased, prefix-stripped env var name to a dotted config path.
///
/// Only the first underscore after a known section name becomes a dot.
/// Names without a known section are returned unchanged.
pub fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section) {
            if let Some(field) = rest.strip_prefix('_') {
                return format!("{section}.{field}");
            }
        }
    }
    key.to_string()
}
