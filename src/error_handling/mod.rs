//! Error handling and decode statistics.
//!
//! This module provides:
//! - The error taxonomy of a decode call (critical vs soft)
//! - The append-only error list and the fallback policy every optional field uses
//! - Thread-safe statistics across many decode calls
//!
//! Error entries are categorized into:
//! - **Critical**: The document, its root, or a record identifier is unusable.
//!   The call returns no record.
//! - **Soft**: An optional field was absent or malformed and was replaced by
//!   its documented default.

mod report;
mod stats;
mod types;

// Re-export public API
pub use report::{resolve, ErrorReport};
pub use stats::DecodeStats;
pub use types::{
    ConfigValidationError, CriticalType, DecodeError, FieldErrorKind, InfoType,
    InitializationError, QualifiedName, TransformError, WarningType,
};
