//! Error type definitions.
//!
//! This module defines every error that can surface from a decode call, the
//! kinds of field-level failures recorded by the fallback policy, and the
//! errors of the ambient layers (logger setup, configuration).

use std::fmt;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

/// Failure of the description transform collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Non-empty HTML that renders to no visible text.
    #[error("description markup renders to no text")]
    EmptyRendering,

    /// The rendered text could not be encoded.
    #[error("description encoding failed: {0}")]
    Encoding(String),
}

/// Why a single field could not be extracted.
///
/// `Absent` and `Malformed` are kept apart so consumers can tell a missing
/// element from one whose text failed coercion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The element or attribute does not exist.
    #[error("absent")]
    Absent,

    /// The value exists but could not be coerced to the expected type.
    #[error("malformed value {value:?}: {reason}")]
    Malformed {
        /// Raw text that failed to coerce
        value: String,
        /// Coercion failure description
        reason: String,
    },

    /// A downstream transform rejected the value.
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
}

impl FieldErrorKind {
    /// Builds a `Malformed` kind from the offending text and any displayable reason.
    pub fn malformed(value: &str, reason: impl fmt::Display) -> Self {
        FieldErrorKind::Malformed {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Namespace prefix plus local tag of an element, as written on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Namespace prefix (`ad` in `ad:ads`)
    pub namespace: Option<String>,
    /// Local tag (`ads` in `ad:ads`)
    pub tag: String,
}

impl QualifiedName {
    /// Creates a prefixed name.
    pub fn new(namespace: &str, tag: &str) -> Self {
        QualifiedName {
            namespace: Some(namespace.to_string()),
            tag: tag.to_string(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", ns, self.tag),
            None => f.write_str(&self.tag),
        }
    }
}

/// Every entry of a decode call's error list.
///
/// The first four variants are critical and abort the call; `Field` is a
/// soft failure that was replaced by a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The response body is empty.
    #[error("empty API response")]
    EmptyDocument,

    /// The body is not well-formed XML.
    #[error("invalid or malformed document: {reason}")]
    MalformedDocument {
        /// Parser diagnostic
        reason: String,
    },

    /// The root element is not the one expected for the requested entity.
    #[error("unexpected API response: expected <{expected}>, found <{found}>{}", .message.as_ref().map(|m| format!(" ({m})")).unwrap_or_default())]
    UnexpectedRoot {
        /// Root element the caller asked for
        expected: QualifiedName,
        /// Root element actually received
        found: QualifiedName,
        /// Server message when the body is an API error document
        message: Option<String>,
    },

    /// A record-identifying field is absent or unusable.
    #[error("{tag}: required identifier {kind}")]
    MissingIdentifier {
        /// Wire-path tag of the identifier
        tag: String,
        /// Why the identifier could not be read
        kind: FieldErrorKind,
    },

    /// An optional field fell back to its default.
    #[error("{tag}: {kind}")]
    Field {
        /// Wire-path tag of the field
        tag: String,
        /// Why the field could not be read
        kind: FieldErrorKind,
    },
}

impl DecodeError {
    /// Whether this error aborts the decode call.
    pub fn is_critical(&self) -> bool {
        !matches!(self, DecodeError::Field { .. })
    }

    /// Tag of a field-level error, `None` for document-level failures.
    pub fn tag(&self) -> Option<&str> {
        match self {
            DecodeError::MissingIdentifier { tag, .. } | DecodeError::Field { tag, .. } => {
                Some(tag)
            }
            _ => None,
        }
    }

    /// Statistics bucket for critical errors.
    pub fn critical_type(&self) -> Option<CriticalType> {
        match self {
            DecodeError::EmptyDocument => Some(CriticalType::EmptyDocument),
            DecodeError::MalformedDocument { .. } => Some(CriticalType::MalformedDocument),
            DecodeError::UnexpectedRoot { .. } => Some(CriticalType::UnexpectedRoot),
            DecodeError::MissingIdentifier { .. } => Some(CriticalType::MissingIdentifier),
            DecodeError::Field { .. } => None,
        }
    }

    /// Statistics bucket for soft errors.
    pub fn warning_type(&self) -> Option<WarningType> {
        match self {
            DecodeError::Field { kind, .. } => Some(match kind {
                FieldErrorKind::Absent => WarningType::AbsentField,
                FieldErrorKind::Malformed { .. } => WarningType::MalformedField,
                FieldErrorKind::Transform(_) => WarningType::TransformFailure,
            }),
            _ => None,
        }
    }
}

/// Types of critical failures, one per abort cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum CriticalType {
    /// Empty response body
    EmptyDocument,
    /// Body is not well-formed XML
    MalformedDocument,
    /// Wrong root element, including API error documents
    UnexpectedRoot,
    /// Record identifier absent or unusable
    MissingIdentifier,
}

/// Types of soft failures recorded by the fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum WarningType {
    /// Field missing from the document
    AbsentField,
    /// Field present but not coercible
    MalformedField,
    /// Description transform rejected the markup
    TransformFailure,
}

/// Informational metrics: records produced, by entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Single-advert documents decoded
    AdvertDecoded,
    /// Listing documents decoded
    ListingDecoded,
    /// Adverts contained in decoded listings
    ListingAdvertDecoded,
    /// Taxonomy documents decoded
    CategoriesDecoded,
}

impl CriticalType {
    /// Returns a human-readable string representation of the critical type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriticalType::EmptyDocument => "Empty API response",
            CriticalType::MalformedDocument => "Malformed document",
            CriticalType::UnexpectedRoot => "Unexpected root element",
            CriticalType::MissingIdentifier => "Missing record identifier",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::AbsentField => "Absent field",
            WarningType::MalformedField => "Malformed field",
            WarningType::TransformFailure => "Description transform failure",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::AdvertDecoded => "Adverts decoded",
            InfoType::ListingDecoded => "Listings decoded",
            InfoType::ListingAdvertDecoded => "Adverts decoded within listings",
            InfoType::CategoriesDecoded => "Category trees decoded",
        }
    }
}
