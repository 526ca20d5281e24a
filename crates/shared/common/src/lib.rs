//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Application error handling on top of domain errors
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
