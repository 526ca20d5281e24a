//! Password value object - hashing, verification and lifecycle flags.
//!
//! The plaintext only exists while a candidate is checked and hashed;
//! the value keeps the Argon2 PHC string plus the expiry/rotation flags
//! owned by account lifecycle logic.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult};
use crate::policy::PasswordPolicy;

/// Salted password hash with expiry and rotation flags.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
    expires_at_utc: Option<DateTime<Utc>>,
    must_change: bool,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .field("expires_at_utc", &self.expires_at_utc)
            .field("must_change", &self.must_change)
            .finish()
    }
}

impl Password {
    /// Hash a candidate accepted by the default policy.
    ///
    /// Returns `None` for absent, blank or out-of-range input.
    pub fn try_create(raw: Option<&str>) -> Option<Self> {
        Self::try_create_with(raw, &PasswordPolicy::default())
    }

    /// Hash a candidate accepted by `policy`.
    pub fn try_create_with(raw: Option<&str>, policy: &PasswordPolicy) -> Option<Self> {
        let raw = raw?;
        match Self::parse(raw, policy) {
            Ok(password) => Some(password),
            Err(DomainError::Internal(msg)) => {
                tracing::error!("Password hashing failed: {}", msg);
                None
            }
            Err(e) => {
                tracing::debug!(reason = %e, "Password rejected");
                None
            }
        }
    }

    /// Check `raw` against `policy` and hash it.
    ///
    /// # Errors
    /// Returns a password error when the policy rejects the candidate,
    /// or an internal error if hashing fails.
    pub fn parse(raw: &str, policy: &PasswordPolicy) -> DomainResult<Self> {
        policy.check(raw)?;

        let hash = Self::derive_hash(raw)?;
        Ok(Self {
            hash,
            expires_at_utc: None,
            must_change: false,
        })
    }

    /// Restore a password from a stored hash.
    ///
    /// Returns `None` unless `hash` is a parseable Argon2 PHC string.
    pub fn from_hash(hash: impl Into<String>) -> Option<Self> {
        let hash = hash.into();
        let algorithm = PasswordHash::new(&hash).ok()?.algorithm;
        if argon2::Algorithm::try_from(algorithm).is_err() {
            return None;
        }

        Some(Self {
            hash,
            expires_at_utc: None,
            must_change: false,
        })
    }

    /// Check a candidate against a stored hash.
    ///
    /// Malformed hashes never match.
    pub fn verify(hash: &str, candidate: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::debug!("Invalid hash format: {}", e);
                false
            }
        }
    }

    /// Generate a random secret that [`Password::try_create`] accepts.
    pub fn generate_strong() -> String {
        PasswordPolicy::default().generate()
    }

    /// Check a candidate against this password.
    pub fn matches(&self, candidate: &str) -> bool {
        Self::verify(&self.hash, candidate)
    }

    /// Get the hash string for storage.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Textual form: the hash, never the plaintext.
    pub fn to_text(&self) -> &str {
        &self.hash
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at_utc
    }

    pub fn must_change(&self) -> bool {
        self.must_change
    }

    /// Set the instant after which the password counts as expired.
    pub fn expire_at(&mut self, at: DateTime<Utc>) {
        self.expires_at_utc = Some(at);
    }

    /// Force a rotation on next use. There is no way to clear the flag;
    /// rotating produces a new `Password`.
    pub fn mark_must_change(&mut self) {
        self.must_change = true;
    }

    /// Whether the expiry instant has been reached.
    pub fn is_expired(&self, clock: &dyn Clock) -> bool {
        self.expires_at_utc.is_some_and(|at| at <= clock.utc_now())
    }

    fn derive_hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hash)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
