//! Shared configuration structures.

use domain::{DomainResult, PasswordPolicy, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use serde::{Deserialize, Serialize};

/// Password policy settings as they appear in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordPolicyConfig {
    /// Minimum accepted length (inclusive)
    pub min_length: usize,
    /// Maximum accepted length (inclusive)
    pub max_length: usize,
    /// Require lower-case, upper-case, digit and symbol characters
    pub require_character_classes: bool,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            require_character_classes: false,
        }
    }
}

impl PasswordPolicyConfig {
    /// Validate the settings and build the domain policy.
    pub fn into_policy(self) -> DomainResult<PasswordPolicy> {
        PasswordPolicy::new(
            self.min_length,
            self.max_length,
            self.require_character_classes,
        )
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
