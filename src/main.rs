//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `locate_ip` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Usage and fatal error reporting
//!
//! All lookup functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::process;

use locate_ip::config::{EXIT_FAILURE, USAGE};
use locate_ip::initialization::init_logger_with;
use locate_ip::{run_lookups, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Usage depends on the raw count: clap swallows a lone `--`, which still counts
    let args: Vec<OsString> = env::args_os().collect();
    if args.len() <= 1 {
        print!("{}", USAGE);
        process::exit(EXIT_FAILURE);
    }
    let cli = Cli::parse_from(args);

    // Optional; lets LOCATE_IP_* settings live in a .env file next to the invocation
    let _ = dotenvy::dotenv();

    let config = match Config::from_env(cli.into_tokens()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("locate-ip error: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run_lookups(&config, &mut stdout).await {
        eprintln!("locate-ip error: {:#}", e);
        process::exit(EXIT_FAILURE);
    }

    Ok(())
}
