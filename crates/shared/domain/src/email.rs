//! Email value object.
//!
//! Holds a canonical (trimmed, lower-cased, grammar-checked) address and
//! a deterministic SHA-256 digest of it, suitable for lookups and indexing.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::clock::Clock;
use crate::constants::{MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH};
use crate::error::{DomainError, DomainResult};

// Applied to the canonical (lower-cased) form only.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z0-9_%+-]+(?:\.[a-z0-9_%+-]+)*@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$",
    )
    .expect("hardcoded email regex is invalid - fix source code")
});

/// Canonical email address with its lookup hash.
///
/// Only obtainable through [`Email::try_create`] or [`Email::parse`], so
/// holding one is proof the address passed validation.
///
/// Equality and hashing only look at the address and its hash; the
/// construction timestamp is audit data.
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    address: String,
    hash: String,
    #[serde(skip)]
    created_at_utc: DateTime<Utc>,
}

impl Email {
    /// Build an email from raw user input.
    ///
    /// Returns `None` when the input is absent, blank or malformed.
    /// The clock only timestamps the construction event.
    pub fn try_create(raw: Option<&str>, clock: &dyn Clock) -> Option<Self> {
        let raw = raw?;
        match Self::parse(raw, clock) {
            Ok(email) => Some(email),
            Err(e) => {
                tracing::debug!(reason = %e, "Email rejected");
                None
            }
        }
    }

    /// Build an email from raw user input, keeping the rejection reason.
    ///
    /// # Errors
    /// Returns a validation error if the canonical form is empty, too long
    /// or does not match the address grammar.
    pub fn parse(raw: &str, clock: &dyn Clock) -> DomainResult<Self> {
        let address = Self::canonicalize(raw);
        Self::validate(&address)?;

        let hash = Self::hash_of(&address);
        let created_at_utc = clock.utc_now();
        tracing::debug!(
            created_at = %created_at_utc,
            hash_prefix = &hash[..8],
            "Email value created"
        );

        Ok(Self {
            address,
            hash,
            created_at_utc,
        })
    }

    /// Trim surrounding whitespace and lower-case.
    pub fn canonicalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Hex-encoded SHA-256 of an already canonical address.
    pub fn hash_of(canonical: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Canonical address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Lookup hash of the canonical address.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// When the value was constructed, as read from the injected clock.
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at_utc
    }

    /// Textual form, identical to [`Email::address`].
    pub fn to_text(&self) -> &str {
        &self.address
    }

    fn validate(address: &str) -> DomainResult<()> {
        if address.is_empty() {
            return Err(DomainError::validation("Email must not be empty"));
        }

        if address.len() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email must be at most {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        if let Some((local, _)) = address.split_once('@') {
            if local.len() > MAX_EMAIL_LOCAL_PART_LENGTH {
                return Err(DomainError::validation(format!(
                    "Email local part must be at most {} characters",
                    MAX_EMAIL_LOCAL_PART_LENGTH
                )));
            }
        }

        if !EMAIL_REGEX.is_match(address) {
            return Err(DomainError::validation("Email format is invalid"));
        }

        Ok(())
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.hash == other.hash
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
        self.hash.hash(state);
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}
