//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Startup, configuration, and per-lookup error definitions
//! - The `ErrorType` classification of lookup failures
//! - Per-run lookup statistics

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{ConfigError, ErrorType, InitializationError, LookupError};
