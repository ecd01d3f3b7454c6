//! Configuration constants.
//!
//! This module defines the fixed values used throughout the application: the
//! remote endpoint, the address pattern, the usage text and environment variable
//! names.

/// Base URL of the geolocation service. The address is appended as the last path segment.
pub const DEFAULT_ENDPOINT: &str = "https://api.ipdata.co";

/// Loose dotted-decimal matcher.
///
/// Accepts one-to-three-digit groups (so `999.999.999.999` passes) and ignores
/// whatever follows the fourth group. This is a filter, not a validator.
pub const ADDRESS_PATTERN: &str = r"^([0-9]{1,3}\.){3}([0-9]{1,3})";

/// Value sent in the `Accept` header of every lookup.
pub const ACCEPT_JSON: &str = "application/json";

/// Usage text printed when the program is invoked without arguments.
pub const USAGE: &str = "Usage: locate-ip ...IP addresses
Examples:
    locate-ip 192.168.1.92 127.0.0.1
    traceroute example.com | awk '{print $2}' | xargs locate-ip
";

/// Exit status used for usage and fatal startup errors.
pub const EXIT_FAILURE: i32 = 1;

// Environment overrides (the CLI itself takes no flags)
/// Overrides [`DEFAULT_ENDPOINT`]
pub const ENDPOINT_ENV: &str = "LOCATE_IP_ENDPOINT";
/// Log level (`error`, `warn`, `info`, `debug`, `trace`)
pub const LOG_LEVEL_ENV: &str = "LOCATE_IP_LOG_LEVEL";
/// Log format (`plain` or `json`)
pub const LOG_FORMAT_ENV: &str = "LOCATE_IP_LOG_FORMAT";

/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
