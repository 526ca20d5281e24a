//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.
//! `render` builds the output, `execute` prints it.

pub mod email;
pub mod password;
pub mod text;
