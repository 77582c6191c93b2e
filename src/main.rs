//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ecg_classifieds` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ecg_classifieds::initialization::init_logger_with;
use ecg_classifieds::{run_decode, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_decode(&config) {
        Ok(summary) => {
            if summary.should_fail(config.fail_on) {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ecg_classifieds error: {:#}", e);
            process::exit(1);
        }
    }
}
