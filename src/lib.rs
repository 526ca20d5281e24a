//! Account Values - credential value objects with an operator CLI.
//!
//! The value objects live in the `domain` crate; this crate wires them
//! to configuration and a command-line front end.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment configuration
//!
//! # CLI Usage
//!
//! ```bash
//! # Canonicalize and hash an address
//! cargo run -- email " Someone@Example.com "
//!
//! # Generate, hash and verify passwords
//! cargo run -- password generate
//! cargo run -- password hash 'm#P52s@ap$V'
//! cargo run -- password verify '$argon2id$...' 'm#P52s@ap$V'
//! ```

pub mod cli;
pub mod commands;
pub mod config;

// Re-export commonly used types at crate root
pub use common::{AppError, AppResult};
pub use config::Config;
pub use domain::{Clock, Email, Password, PasswordPolicy, SystemClock};
