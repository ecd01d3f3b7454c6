//! Lookup statistics tracking.
//!
//! Counts successes and failures per [`ErrorType`] over one run. Lookups are
//! sequential, so plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-run lookup statistics.
///
/// All error types are initialized to zero on creation.
#[derive(Debug)]
pub struct LookupStats {
    succeeded: usize,
    errors: HashMap<ErrorType, usize>,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, 0);
        }

        LookupStats {
            succeeded: 0,
            errors,
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }

    /// Logs the summary at info level, one line per non-zero error type.
    pub fn log_summary(&self) {
        log::info!(
            "Lookups finished: {} succeeded, {} failed",
            self.succeeded,
            self.total_errors()
        );
        for error_type in ErrorType::iter() {
            let count = self.get_error_count(error_type);
            if count > 0 {
                log::info!("   {}: {}", error_type, count);
            }
        }
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
