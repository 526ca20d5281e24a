//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `email` - Canonical address and lookup hash
//! - `password` - Generate, hash and verify passwords
//! - `text` - Text encoding helpers

pub mod args;

pub use args::{Cli, Commands};
