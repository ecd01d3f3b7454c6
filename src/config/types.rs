//! Configuration types.
//!
//! This module defines the enums and structs that make up the run configuration.
//! The command line carries only address tokens, so every tunable here is read
//! from the environment.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, ENDPOINT_ENV, LOG_FORMAT_ENV, LOG_LEVEL_ENV,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// There are no flags: every argument, including ones that start with `-`, is an
/// address token. Help and version flags are disabled for the same reason.
/// Tokens are kept as `OsString` so an argument that is not valid UTF-8 is just a
/// token that fails to match, not a parse error for the whole command line.
///
/// clap consumes a leading `--` as its end-of-options marker. That token could
/// never match an address, so losing it changes no output; whether to print usage
/// is decided from the raw argument count instead (see `main`).
#[derive(Debug, Parser)]
#[command(
    name = "locate-ip",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Address-like tokens, e.g. the second column of `traceroute` output
    #[arg(
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub tokens: Vec<OsString>,
}

impl Cli {
    /// Converts the tokens to strings, replacing invalid UTF-8 with U+FFFD.
    ///
    /// A valid prefix survives, so `1.2.3.4<0xff>` still yields `1.2.3.4`
    /// after filtering.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
            .into_iter()
            .map(|token| token.to_string_lossy().into_owned())
            .collect()
    }
}

/// Run configuration.
///
/// Can be constructed programmatically, which is how the integration tests point
/// lookups at a mock server.
///
/// # Examples
///
/// ```no_run
/// use locate_ip::Config;
///
/// let config = Config {
///     addresses: vec!["8.8.8.8".to_string()],
///     endpoint: "http://127.0.0.1:8080".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw command-line tokens, unfiltered
    pub addresses: Vec<String>,

    /// Base URL of the geolocation service
    pub endpoint: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addresses: Vec::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration for `addresses`, applying overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a log level or format variable holds
    /// an unrecognized value.
    pub fn from_env(addresses: Vec<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(addresses, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(addresses: Vec<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            addresses,
            ..Default::default()
        };

        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = parse_value(LOG_LEVEL_ENV, &level)?;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.log_format = parse_value(LOG_FORMAT_ENV, &format)?;
        }

        Ok(config)
    }
}

fn parse_value<T: ValueEnum>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    T::from_str(raw.trim(), true).map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_cli_collects_tokens_in_order() {
        let cli = Cli::try_parse_from(["locate-ip", "192.168.1.92", "*", "127.0.0.1"])
            .expect("tokens should parse");
        assert_eq!(cli.into_tokens(), vec!["192.168.1.92", "*", "127.0.0.1"]);
    }

    #[test]
    fn test_cli_accepts_no_tokens() {
        let cli = Cli::try_parse_from(["locate-ip"]).expect("empty invocation should parse");
        assert!(cli.tokens.is_empty());
    }

    #[test]
    fn test_cli_treats_flag_like_tokens_as_tokens() {
        let cli = Cli::try_parse_from(["locate-ip", "-h", "1.1.1.1", "-x"])
            .expect("flag-like tokens should parse");
        assert_eq!(cli.into_tokens(), vec!["-h", "1.1.1.1", "-x"]);
    }

    #[test]
    fn test_cli_lone_double_dash_yields_no_tokens() {
        let cli = Cli::try_parse_from(["locate-ip", "--"]).expect("`--` should parse");
        assert!(cli.tokens.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_cli_accepts_invalid_utf8_tokens() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("locate-ip"),
            OsString::from_vec(b"\xff".to_vec()),
            OsString::from_vec(b"1.2.3.4\xff".to_vec()),
            OsString::from("5.6.7.8"),
        ];
        let cli = Cli::try_parse_from(args).expect("invalid UTF-8 should not be rejected");
        assert_eq!(
            cli.into_tokens(),
            vec!["\u{FFFD}", "1.2.3.4\u{FFFD}", "5.6.7.8"]
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.addresses.is_empty());
        assert_eq!(config.endpoint, "https://api.ipdata.co");
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Warn
        );
        assert!(matches!(config.log_format, LogFormat::Plain));
        assert!(config.user_agent.starts_with("locate_ip/"));
    }

    #[test]
    fn test_from_lookup_without_overrides() {
        let config = Config::from_lookup(vec!["1.2.3.4".into()], env_of(&[])).unwrap();
        assert_eq!(config.addresses, vec!["1.2.3.4".to_string()]);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_from_lookup_endpoint_trailing_slash_trimmed() {
        let config = Config::from_lookup(
            Vec::new(),
            env_of(&[(ENDPOINT_ENV, "http://127.0.0.1:9000/")]),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_from_lookup_blank_endpoint_ignored() {
        let config = Config::from_lookup(Vec::new(), env_of(&[(ENDPOINT_ENV, "  ")])).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_from_lookup_log_settings_case_insensitive() {
        let config = Config::from_lookup(
            Vec::new(),
            env_of(&[(LOG_LEVEL_ENV, "DEBUG"), (LOG_FORMAT_ENV, "json")]),
        )
        .unwrap();
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Debug
        );
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_from_lookup_rejects_unknown_level() {
        let err = Config::from_lookup(Vec::new(), env_of(&[(LOG_LEVEL_ENV, "loud")]))
            .expect_err("unknown level should be rejected");
        assert_eq!(
            err.to_string(),
            "Invalid value \"loud\" for LOCATE_IP_LOG_LEVEL"
        );
    }
}
