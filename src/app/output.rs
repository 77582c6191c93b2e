//! JSON-lines output.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::parse::Decoded;

/// One output line per decoded input.
#[derive(Debug, Serialize)]
pub struct OutputLine<'a, T> {
    /// Where the document came from
    pub source: &'a str,
    /// Whether decoding was aborted
    pub critical: bool,
    /// Every error of the decode call, rendered as text
    pub errors: Vec<String>,
    /// The record, `null` when decoding was aborted
    pub record: Option<&'a T>,
}

impl<'a, T> OutputLine<'a, T> {
    /// Borrows a decode outcome for serialization.
    pub fn new(source: &'a str, decoded: &'a Decoded<T>) -> Self {
        OutputLine {
            source,
            critical: decoded.critical,
            errors: decoded.errors.iter().map(ToString::to_string).collect(),
            record: decoded.record.as_ref(),
        }
    }
}

/// Serializes `line` and terminates it with a newline.
pub fn write_line<T: Serialize>(
    out: &mut dyn Write,
    line: &OutputLine<'_, T>,
    pretty: bool,
) -> Result<()> {
    let serialized = if pretty {
        serde_json::to_writer_pretty(&mut *out, line)
    } else {
        serde_json::to_writer(&mut *out, line)
    };
    serialized.with_context(|| format!("Failed to serialize output for {}", line.source))?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}
