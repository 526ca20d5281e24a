//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Account Values - validate, canonicalize and hash account credentials
#[derive(Parser, Debug)]
#[command(name = "account-values")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Canonicalize an email address and print its lookup hash
    Email(EmailArgs),

    /// Generate, hash or verify passwords
    Password(PasswordArgs),

    /// Text helpers
    Text(TextArgs),
}

/// Arguments for the email command
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Raw address (surrounding whitespace and case are normalized)
    pub address: String,
}

/// Arguments for the password command
#[derive(Parser, Debug)]
pub struct PasswordArgs {
    #[command(subcommand)]
    pub action: PasswordAction,
}

/// Password actions
#[derive(Subcommand, Debug)]
pub enum PasswordAction {
    /// Generate a random password accepted by the configured policy
    Generate,
    /// Hash a password with a fresh salt
    Hash {
        /// Plaintext password
        secret: String,
    },
    /// Check a password against a stored hash
    Verify {
        /// Stored PHC hash string
        hash: String,
        /// Plaintext candidate
        secret: String,
    },
}

/// Arguments for the text command
#[derive(Parser, Debug)]
pub struct TextArgs {
    #[command(subcommand)]
    pub action: TextAction,
}

/// Text actions
#[derive(Subcommand, Debug)]
pub enum TextAction {
    /// Encode text as base64
    Base64 {
        /// Text to encode
        text: String,
    },
}
