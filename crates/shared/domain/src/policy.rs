//! Password acceptance policy and strong secret generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::constants::{
    DEFAULT_GENERATED_PASSWORD_LENGTH, DIGIT_CHARS, LOWERCASE_CHARS, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_POLICY_LENGTH, SYMBOL_CHARS, UPPERCASE_CHARS,
};
use crate::error::{DomainError, DomainResult};

const CHARACTER_CLASSES: [&str; 4] = [LOWERCASE_CHARS, UPPERCASE_CHARS, DIGIT_CHARS, SYMBOL_CHARS];

/// Rules a plaintext secret must satisfy before it is hashed.
///
/// Lengths are counted in characters and both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    require_character_classes: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            require_character_classes: false,
        }
    }
}

impl PasswordPolicy {
    /// Create a policy with custom bounds.
    ///
    /// # Errors
    /// Returns validation error if `min_length` is below the policy floor
    /// or greater than `max_length`.
    pub fn new(
        min_length: usize,
        max_length: usize,
        require_character_classes: bool,
    ) -> DomainResult<Self> {
        if min_length < MIN_POLICY_LENGTH {
            return Err(DomainError::validation(format!(
                "Minimum password length must be at least {}",
                MIN_POLICY_LENGTH
            )));
        }

        if min_length > max_length {
            return Err(DomainError::validation(format!(
                "Minimum password length {} exceeds maximum {}",
                min_length, max_length
            )));
        }

        Ok(Self {
            min_length,
            max_length,
            require_character_classes,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn requires_character_classes(&self) -> bool {
        self.require_character_classes
    }

    /// Check a candidate against this policy.
    ///
    /// # Errors
    /// Returns a password error naming the first rule the candidate breaks.
    pub fn check(&self, candidate: &str) -> DomainResult<()> {
        if candidate.trim().is_empty() {
            return Err(DomainError::password("Password must not be empty"));
        }

        let length = candidate.chars().count();
        if length < self.min_length {
            return Err(DomainError::password(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        if length > self.max_length {
            return Err(DomainError::password(format!(
                "Password must be at most {} characters",
                self.max_length
            )));
        }

        if self.require_character_classes && !has_every_class(candidate) {
            return Err(DomainError::password(
                "Password must mix lower-case, upper-case, digit and symbol characters",
            ));
        }

        Ok(())
    }

    /// Generate a random secret this policy accepts.
    ///
    /// Always carries at least one character of every class, so it passes
    /// whether or not classes are required.
    pub fn generate(&self) -> String {
        let length = DEFAULT_GENERATED_PASSWORD_LENGTH.clamp(self.min_length, self.max_length);
        let mut rng = OsRng;

        let mut chars: Vec<char> = CHARACTER_CLASSES
            .iter()
            .filter_map(|set| set.as_bytes().choose(&mut rng))
            .map(|&b| char::from(b))
            .collect();

        let all = CHARACTER_CLASSES.concat().into_bytes();
        let remaining = length.saturating_sub(chars.len());
        chars.extend(
            (0..remaining)
                .filter_map(|_| all.choose(&mut rng))
                .map(|&b| char::from(b)),
        );

        chars.shuffle(&mut rng);
        chars.into_iter().collect()
    }
}

fn has_every_class(candidate: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;

    for c in candidate.chars() {
        match c {
            c if c.is_lowercase() => lower = true,
            c if c.is_uppercase() => upper = true,
            c if c.is_ascii_digit() => digit = true,
            c if !c.is_alphanumeric() && !c.is_whitespace() => symbol = true,
            _ => {}
        }
    }

    lower && upper && digit && symbol
}
