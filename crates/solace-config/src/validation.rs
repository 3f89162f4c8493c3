// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty paths, positive capacities, and sampling ranges.

use crate::diagnostic::ConfigError;
use crate::model::SolaceConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SolaceConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.memory.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "memory.path must not be empty".to_string(),
        });
    }

    if config.memory.short_term_capacity == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.short_term_capacity must be at least 1".to_string(),
        });
    }

    if config.memory.episodic_capacity == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.episodic_capacity must be at least 1".to_string(),
        });
    }

    if config.llm.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "llm.timeout_secs must be at least 1".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.llm.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                config.llm.temperature
            ),
        });
    }

    if config.llm.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "llm.max_tokens must be at least 1".to_string(),
        });
    }

    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
