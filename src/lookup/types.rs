//! Lookup data structures.

use serde::Deserialize;
use std::fmt;

/// Location fields decoded from one successful lookup.
///
/// Every field is required and must be a JSON string; other fields in the
/// response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupResult {
    pub city: String,
    pub region: String,
    pub country_code: String,
    pub continent_code: String,
    pub organisation: String,
}

impl fmt::Display for LookupResult {
    /// `<city> <region> <country_code> <continent_code>, <organisation>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}, {}",
            self.city, self.region, self.country_code, self.continent_code, self.organisation
        )
    }
}
