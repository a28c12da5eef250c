//! Command-line argument parsing
//!
//! Global options cover output format, color and logging; one
//! subcommand per plugin operation. Values left unset here may be
//! filled from the TOML configuration file afterwards.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "capver")]
#[command(about = "Query installed application version metadata")]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Force colored output (overrides TTY detection and NO_COLOR)
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the installed version and build number
    Version,
    /// Show full package information
    Package,
    /// Show the last-update record
    LastUpdate,
    /// Show the version status snapshot
    Status,
    /// Request a version update (redirected to the cap-version CLI)
    Update {
        /// Version to request, e.g. "1.2.3"
        version: Option<String>,
        /// Build number to request
        #[arg(long = "build", value_name = "N")]
        build: Option<i64>,
    },
    /// Request a Trapeze configuration run (redirected to the cap-version CLI)
    Trapeze {
        /// Trapeze configuration file
        #[arg(long = "config", value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Args {
    /// Parse from an explicit argument vector (tests use this)
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}
