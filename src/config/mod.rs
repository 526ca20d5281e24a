//! Application configuration module
//!
//! Handles environment variables and their defaults.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
