//! Command-line flags.
//!
//! Flags follow the single-dash style (`-db path`, `-port=9090`); a double
//! dash is accepted too. Every flag is optional and only overrides what the
//! defaults or the config file already set.

use std::path::PathBuf;

/// Usage text printed for `-h` and after a flag error.
pub const USAGE: &str = "\
usage: locboxd [-db PATH] [-port PORT] [-config FILE]

  -db PATH       database location (default \"db.bolt\")
  -port PORT     port to listen on (default 8080)
  -config FILE   optional TOML configuration file
  -h, -help      print this help

environment:
  RUST_LOG       log filter, overrides [logging] filter from the config file";

/// Parsed command-line flags.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cli {
    /// `-db`: database file path.
    pub db: Option<PathBuf>,
    /// `-port`: TCP port.
    pub port: Option<u16>,
    /// `-config`: TOML file to load before applying flags.
    pub config: Option<PathBuf>,
}

/// Flag parsing failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    /// `-h` or `-help` was given.
    #[error("help requested")]
    Help,
    /// A flag that is not defined.
    #[error("flag provided but not defined: {0}")]
    Unknown(String),
    /// A flag was given without its value.
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    /// `-port` was not a valid TCP port.
    #[error("invalid value {value:?} for flag -port")]
    InvalidPort { value: String },
}

impl Cli {
    /// Parse flags, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] on unknown flags, missing values, a bad port,
    /// or when help is requested.
    pub fn parse_from<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let Some(flag) = arg
                .strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .filter(|flag| !flag.is_empty())
            else {
                return Err(CliError::Unknown(arg));
            };

            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };

            if matches!(name, "h" | "help") {
                return Err(CliError::Help);
            }
            if !matches!(name, "db" | "port" | "config") {
                return Err(CliError::Unknown(arg.clone()));
            }

            let value = inline
                .or_else(|| args.next())
                .ok_or_else(|| CliError::MissingValue(name.to_string()))?;

            match name {
                "db" => cli.db = Some(PathBuf::from(value)),
                "config" => cli.config = Some(PathBuf::from(value)),
                _ => {
                    let port = value
                        .parse::<u16>()
                        .map_err(|_| CliError::InvalidPort { value })?;
                    cli.port = Some(port);
                }
            }
        }

        Ok(cli)
    }
}
