//! Application settings loaded from environment variables.

use std::cell::RefCell;
use std::env;
use std::str::FromStr;

use common::{AppError, AppResult, LogConfig, PasswordPolicyConfig};
use domain::PasswordPolicy;

use super::constants::{
    ENV_LOG_LEVEL, ENV_PASSWORD_MAX_LENGTH, ENV_PASSWORD_MIN_LENGTH,
    ENV_PASSWORD_REQUIRE_CHARACTER_CLASSES,
};

/// Application configuration
#[derive(Clone, Default)]
pub struct Config {
    pub password_policy: PasswordPolicyConfig,
    pub log: LogConfig,
    rejected_keys: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("password_min_length", &self.password_policy.min_length)
            .field("password_max_length", &self.password_policy.max_length)
            .field(
                "password_require_character_classes",
                &self.password_policy.require_character_classes,
            )
            .field("log_level", &self.log.level)
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparsable values fall back to their defaults and are reported by
    /// [`Config::rejected_keys`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PasswordPolicyConfig::default();
        let rejected = RefCell::new(Vec::new());

        let password_policy = PasswordPolicyConfig {
            min_length: parse_or(&lookup, &rejected, ENV_PASSWORD_MIN_LENGTH, defaults.min_length),
            max_length: parse_or(&lookup, &rejected, ENV_PASSWORD_MAX_LENGTH, defaults.max_length),
            require_character_classes: parse_or(
                &lookup,
                &rejected,
                ENV_PASSWORD_REQUIRE_CHARACTER_CLASSES,
                defaults.require_character_classes,
            ),
        };

        Self {
            password_policy,
            log: LogConfig {
                level: lookup(ENV_LOG_LEVEL).unwrap_or_else(|| LogConfig::default().level),
            },
            rejected_keys: rejected.into_inner(),
        }
    }

    /// Keys whose values could not be parsed and were replaced by defaults.
    ///
    /// Loading happens before logging is set up, so callers report these.
    pub fn rejected_keys(&self) -> &[String] {
        &self.rejected_keys
    }

    /// Build the validated password policy.
    ///
    /// # Errors
    /// Returns a configuration error if the bounds are inconsistent.
    pub fn password_policy(&self) -> AppResult<PasswordPolicy> {
        self.password_policy
            .clone()
            .into_policy()
            .map_err(|e| AppError::config(e.to_string()))
    }
}

fn parse_or<F, T>(lookup: &F, rejected: &RefCell<Vec<String>>, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            rejected.borrow_mut().push(key.to_string());
            default
        }),
        None => default,
    }
}
