//! Batch decoding driver.
//!
//! Reads every configured input, decodes it as the configured entity kind,
//! writes one JSON line per input and tallies statistics across the run.

mod input;
mod output;
pub mod statistics;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::config::{Config, EntityKind, FailOn};
use crate::error_handling::{DecodeStats, InfoType};
use crate::parse::{Decoded, Decoder};

use input::{read_input, source_name};
use output::{write_line, OutputLine};
use statistics::{print_decode_statistics, print_simple_summary};

/// Totals of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Inputs read
    pub inputs: usize,
    /// Inputs that produced a record
    pub decoded: usize,
    /// Inputs whose decoding was aborted
    pub critical: usize,
    /// Field fallbacks across all decoded inputs
    pub soft_errors: usize,
}

impl DecodeSummary {
    /// Whether the run should end with a failure status under `policy`.
    pub fn should_fail(&self, policy: FailOn) -> bool {
        match policy {
            FailOn::Never => false,
            FailOn::Critical => self.critical > 0,
            FailOn::AnyError => self.critical > 0 || self.soft_errors > 0,
        }
    }

    fn record<T>(&mut self, decoded: &Decoded<T>) {
        self.inputs += 1;
        if decoded.critical {
            self.critical += 1;
        } else {
            self.decoded += 1;
        }
        self.soft_errors += decoded.errors.iter().filter(|e| !e.is_critical()).count();
    }
}

/// Decodes every input of `config` and writes the JSON lines.
///
/// Decode failures are part of the output, not errors of the run: an input
/// that cannot be decoded yields a line with `critical: true`. The run itself
/// fails only on invalid configuration or I/O errors.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, an input cannot be read,
/// or the output cannot be written.
pub fn run_decode(config: &Config) -> Result<DecodeSummary> {
    config.validate().context("Invalid configuration")?;

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let decoder = Decoder::new();
    let stats = DecodeStats::new();
    let mut summary = DecodeSummary::default();

    for path in &config.inputs {
        let source = source_name(path);
        let body = read_input(path)?;
        info!("Decoding {} as {:?}", source, config.kind);

        match config.kind {
            EntityKind::Advert => {
                let decoded = decoder.advert(&body);
                if decoded.record.is_some() {
                    stats.increment_info(InfoType::AdvertDecoded);
                }
                emit(&source, &decoded, config, &stats, &mut summary, out.as_mut())?;
            }
            EntityKind::Listing => {
                let decoded = decoder.listing(&body);
                if let Some(listing) = &decoded.record {
                    stats.increment_info(InfoType::ListingDecoded);
                    stats.add_info(InfoType::ListingAdvertDecoded, listing.adverts.len());
                }
                emit(&source, &decoded, config, &stats, &mut summary, out.as_mut())?;
            }
            EntityKind::Categories => {
                let decoded = decoder.categories(&body);
                if decoded.record.is_some() {
                    stats.increment_info(InfoType::CategoriesDecoded);
                }
                emit(&source, &decoded, config, &stats, &mut summary, out.as_mut())?;
            }
        }
    }

    out.flush().context("Failed to flush output")?;

    print_decode_statistics(&stats);
    print_simple_summary(&summary);

    Ok(summary)
}

fn emit<T: Serialize>(
    source: &str,
    decoded: &Decoded<T>,
    config: &Config,
    stats: &DecodeStats,
    summary: &mut DecodeSummary,
    out: &mut dyn Write,
) -> Result<()> {
    stats.record_errors(&decoded.errors);
    summary.record(decoded);
    if let Some(error) = decoded.critical_error() {
        log::warn!("{}: {}", source, error);
    }
    write_line(out, &OutputLine::new(source, decoded), config.pretty)
}
