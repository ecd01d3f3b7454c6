//! Address pattern compilation.

use crate::config::ADDRESS_PATTERN;
use crate::error_handling::InitializationError;
use crate::filter::AddressFilter;

/// Compiles [`ADDRESS_PATTERN`] into an [`AddressFilter`].
///
/// Runs once per process, before any lookup.
///
/// # Errors
///
/// Returns `InitializationError::PatternError` if the pattern does not compile.
pub fn init_matcher() -> Result<AddressFilter, InitializationError> {
    AddressFilter::with_pattern(ADDRESS_PATTERN)
}
