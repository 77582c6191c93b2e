//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::STDIN_MARKER;
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace, including every field fallback
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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which entity every input document is expected to contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    /// A single advert (`ad:ad`)
    Advert,
    /// A page of adverts with pagination (`ad:ads`)
    Listing,
    /// The category taxonomy (`cat:categories`)
    Categories,
}

/// When the batch run should exit with a failure status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit successfully once every input was read
    Never,
    /// Fail if any input could not be decoded (default)
    Critical,
    /// Fail if any input produced any error, including field fallbacks
    AnyError,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary; construct it programmatically through
/// `Default` when using the library.
///
/// # Examples
///
/// ```bash
/// # Decode one advert
/// ecg_classifieds advert.xml
///
/// # Decode listing pages into a JSON-lines file
/// ecg_classifieds --kind listing page1.xml page2.xml --output adverts.jsonl
///
/// # Read a taxonomy from stdin, fail on any fallback
/// curl -s "$API/categories" | ecg_classifieds --kind categories --fail-on any-error -
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ecg_classifieds",
    version,
    about = "Decodes eBay Classifieds XML API responses into JSON records."
)]
pub struct Config {
    /// XML documents to decode (`-` reads standard input)
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Entity every input contains: advert|listing|categories
    #[arg(short, long, value_enum, default_value_t = EntityKind::Advert)]
    pub kind: EntityKind,

    /// Write JSON lines here instead of standard output
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Pretty-print each JSON record (one document per input, no longer one line)
    #[arg(long)]
    pub pretty: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit status policy: never|critical|any-error
    #[arg(long, value_enum, default_value_t = FailOn::Critical)]
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            kind: EntityKind::Advert,
            output: None,
            pretty: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Critical,
        }
    }
}

impl Config {
    /// Checks the settings that `clap` cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first offending field: no inputs, standard input listed
    /// more than once, or an output path that is also an input.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.inputs.is_empty() {
            return Err(ConfigValidationError {
                field: "inputs",
                message: format!("at least one input file (or `{STDIN_MARKER}`) is required"),
            });
        }

        let stdin_count = self
            .inputs
            .iter()
            .filter(|p| p.as_os_str() == STDIN_MARKER)
            .count();
        if stdin_count > 1 {
            return Err(ConfigValidationError {
                field: "inputs",
                message: format!("standard input (`{STDIN_MARKER}`) can only be read once"),
            });
        }

        if let Some(output) = &self.output {
            if self.inputs.contains(output) {
                return Err(ConfigValidationError {
                    field: "output",
                    message: format!("{} is also an input", output.display()),
                });
            }
        }

        Ok(())
    }
}
