//! IP geolocation lookups against a remote web service.
//!
//! One HTTP request per address, issued in sequence. The JSON body is decoded
//! into a [`LookupResult`] or classified as a [`crate::error_handling::LookupError`].

mod client;
mod types;

// Re-export public API
pub use client::{decode_body, LookupClient};
pub use types::LookupResult;
