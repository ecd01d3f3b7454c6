//! Argument filtering.
//!
//! Picks the address-like tokens out of the command line. The match is loose on
//! purpose: it lets `traceroute` output be piped in unmodified, dropping the `*`
//! placeholders for unanswered hops while keeping anything that starts with four
//! dotted digit groups.

use regex::Regex;

use crate::error_handling::InitializationError;

/// Compiled address matcher.
#[derive(Debug, Clone)]
pub struct AddressFilter {
    pattern: Regex,
}

impl AddressFilter {
    /// Compiles `pattern` into a filter.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::PatternError` if `pattern` is not a valid regex.
    pub fn with_pattern(pattern: &str) -> Result<Self, InitializationError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns the matched prefix of `token`, or `None` if it is not address-like.
    ///
    /// Anything after the fourth group is discarded: `"10.0.0.1:9999/x"` yields
    /// `"10.0.0.1"`. Groups are not range-checked.
    pub fn extract<'a>(&self, token: &'a str) -> Option<&'a str> {
        self.pattern.find(token).map(|m| m.as_str())
    }

    /// Extracts every address-like token, preserving input order.
    pub fn filter<'a, I, S>(&self, tokens: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + 'a + ?Sized,
    {
        tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let extracted = self.extract(token);
                if extracted.is_none() {
                    log::debug!("Skipping non-address token {:?}", token);
                }
                extracted
            })
            .collect()
    }
}
