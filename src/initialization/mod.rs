//! Application initialization and resource setup.
//!
//! Ordered startup steps, each returning the resource it builds:
//! - Logger
//! - HTTP client
//! - Address matcher (compiled pattern)
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;
mod matcher;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use matcher::init_matcher;
