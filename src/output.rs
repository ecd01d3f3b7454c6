//! Result line formatting.
//!
//! Output format, one line per accepted token:
//!
//! ```text
//! Hop <n> <address>, <city> <region> <country_code> <continent_code>, <organisation>
//! Hop <n> <address> is a private IP address
//! Hop <n> Error ...: <detail>
//! ```

use std::io::{self, Write};

use crate::error_handling::LookupError;
use crate::lookup::LookupResult;

/// Renders a lookup outcome without the hop prefix.
pub fn result_line(address: &str, result: &Result<LookupResult, LookupError>) -> String {
    match result {
        Ok(location) => format!("{}, {}", address, location),
        Err(e) => e.to_string(),
    }
}

/// Prefixes `line` with its zero-based hop index.
pub fn hop_line(index: usize, line: &str) -> String {
    format!("Hop {} {}", index, line)
}

/// Writes one hop line and flushes, so results show up as each lookup completes.
pub fn write_hop<W: Write>(out: &mut W, index: usize, line: &str) -> io::Result<()> {
    writeln!(out, "{}", hop_line(index, line))?;
    out.flush()
}
