//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, address pattern, usage text)
//! - Log level/format option types
//! - The `Config` struct and its environment overrides

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, LogFormat, LogLevel};
