//! locate_ip library: IP geolocation lookups for traceroute hops
//!
//! Filters address-like tokens out of a list of strings, looks each one up on a
//! geolocation web service, and writes one `Hop <n> ...` line per accepted token.
//!
//! # Example
//!
//! ```no_run
//! use locate_ip::{run_lookups, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     addresses: vec!["8.8.8.8".to_string(), "*".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_lookups(&config, &mut std::io::stdout()).await?;
//! println!("{} of {} tokens looked up", report.accepted, report.total_tokens);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups use the async `reqwest` client and need a Tokio runtime.

pub mod config;
pub mod error_handling;
pub mod filter;
pub mod initialization;
pub mod lookup;
pub mod output;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InitializationError, LookupError};
pub use filter::AddressFilter;
pub use lookup::{LookupClient, LookupResult};
pub use run::{run_lookups, LookupReport};

// Internal run module (contains the main lookup loop)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::config::Config;
    use crate::error_handling::LookupStats;
    use crate::initialization::{init_client, init_matcher};
    use crate::lookup::LookupClient;
    use crate::output::{result_line, write_hop};

    /// Summary of a lookup run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LookupReport {
        /// Number of tokens passed in
        pub total_tokens: usize,
        /// Tokens that matched the address pattern (one lookup each)
        pub accepted: usize,
        /// Lookups that produced a location
        pub succeeded: usize,
        /// Lookups that produced an error line
        pub failed: usize,
    }

    /// Runs the lookups described by `config`, writing one hop line per accepted token to `out`.
    ///
    /// Hop indices count accepted tokens only, so a dropped `*` does not leave a gap.
    /// Per-lookup failures are written as lines and never abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the matcher or HTTP client cannot be initialized, or if
    /// writing to `out` fails.
    pub async fn run_lookups<W: Write>(config: &Config, out: &mut W) -> Result<LookupReport> {
        let filter = init_matcher().context("Failed to compile address pattern")?;
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let lookup_client = LookupClient::new(client, config.endpoint.clone());

        let addresses = filter.filter(&config.addresses);
        info!(
            "{} of {} tokens look like addresses; querying {}",
            addresses.len(),
            config.addresses.len(),
            lookup_client.endpoint()
        );

        let mut stats = LookupStats::new();
        for (hop, address) in addresses.iter().enumerate() {
            let result = lookup_client.lookup(address).await;
            match &result {
                Ok(_) => stats.record_success(),
                Err(e) => {
                    warn!(
                        "Lookup failed for {} ({}): {}",
                        e.address(),
                        e.error_type(),
                        e
                    );
                    stats.increment_error(e.error_type());
                }
            }

            write_hop(out, hop, &result_line(address, &result))
                .with_context(|| format!("Failed to write result for hop {}", hop))?;
        }

        stats.log_summary();

        Ok(LookupReport {
            total_tokens: config.addresses.len(),
            accepted: addresses.len(),
            succeeded: stats.succeeded(),
            failed: stats.total_errors(),
        })
    }
}
