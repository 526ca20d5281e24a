//! Environment variable names and defaults.

// =============================================================================
// Password Policy
// =============================================================================

pub const ENV_PASSWORD_MIN_LENGTH: &str = "PASSWORD_MIN_LENGTH";

pub const ENV_PASSWORD_MAX_LENGTH: &str = "PASSWORD_MAX_LENGTH";

pub const ENV_PASSWORD_REQUIRE_CHARACTER_CLASSES: &str = "PASSWORD_REQUIRE_CHARACTER_CLASSES";

// =============================================================================
// Logging
// =============================================================================

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Filter used by `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";
