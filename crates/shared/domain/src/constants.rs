//! Domain-level constants.
//!
//! These constants define the acceptance rules for account value objects.

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length requirement (inclusive)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length requirement (inclusive)
pub const MAX_PASSWORD_LENGTH: usize = 48;

/// Smallest minimum length a policy may be configured with.
///
/// Generated secrets carry one character of each class, so the policy
/// must leave room for all of them.
pub const MIN_POLICY_LENGTH: usize = 4;

/// Length of secrets produced by the generator, clamped to the policy range
pub const DEFAULT_GENERATED_PASSWORD_LENGTH: usize = 16;

// =============================================================================
// Password Character Classes
// =============================================================================

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DIGIT_CHARS: &str = "0123456789";

/// Symbols used by the generator. Any non-alphanumeric character
/// satisfies the symbol class during validation.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()-_=+[]{}?";

// =============================================================================
// Email
// =============================================================================

/// Maximum length of a canonical address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the local part (before `@`)
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;
