//! Configuration and wire-contract constants.
//!
//! This module provides:
//! - Constants of the API contract (root elements, defaults, picture variants)
//! - CLI option types and parsing, with validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, EntityKind, FailOn, LogFormat, LogLevel};
