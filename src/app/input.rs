//! Reading input documents.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::STDIN_MARKER;

/// Reads one input document, `-` meaning standard input.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read standard input")?;
        return Ok(body);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

/// Display name of an input in output lines and logs.
pub fn source_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_MARKER {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
