//! Top-level decoders.
//!
//! Each decoder runs the same state machine: parse the raw body, check the
//! root element identity, then hand the root to the matching builder. Any
//! critical failure aborts the call and no record is returned; soft failures
//! are collected along the way and returned next to the record.
//!
//! Decoding is synchronous, performs no I/O and shares no mutable state
//! between calls, so a [`Decoder`] can be used from many threads at once.

use serde::Serialize;

use crate::build::{
    build_advert, build_categories, build_listing, DescriptionTransform, HtmlToPlainText,
};
use crate::config::{
    ADVERT_ROOT, ADVERT_TAG_SCOPE, API_ERROR_ROOT, CATEGORIES_ROOT, LISTING_ROOT,
};
use crate::error_handling::{DecodeError, ErrorReport, QualifiedName};
use crate::extract;
use crate::models::{Advert, Category, CategoryListing};
use crate::xml::{parse_document, Element};


/// Outcome of one decode call.
///
/// Check [`Decoded::critical`] first: `errors` can be non-empty on a fully
/// successful decode, in which case every entry is a field that fell back
/// to its default.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    /// The record, `None` exactly when `critical` is set
    pub record: Option<T>,
    /// Every error of the call, in the order it was recorded
    pub errors: Vec<DecodeError>,
    /// Whether the call was aborted
    pub critical: bool,
}

impl<T> Decoded<T> {
    fn complete(record: T, report: ErrorReport) -> Self {
        Decoded {
            record: Some(record),
            errors: report.into_vec(),
            critical: false,
        }
    }

    fn aborted(error: DecodeError, report: ErrorReport) -> Self {
        let mut errors = report.into_vec();
        errors.push(error);
        Decoded {
            record: None,
            errors,
            critical: true,
        }
    }

    /// The error that aborted the call, if any.
    pub fn critical_error(&self) -> Option<&DecodeError> {
        self.errors.iter().find(|e| e.is_critical())
    }

    /// Converts into a `Result`, keeping the soft errors of a successful call.
    ///
    /// # Errors
    ///
    /// Returns the aborting error when the call was critical.
    pub fn into_result(self) -> Result<(T, Vec<DecodeError>), DecodeError> {
        match self.record {
            Some(record) if !self.critical => Ok((record, self.errors)),
            _ => Err(self
                .errors
                .into_iter()
                .find(DecodeError::is_critical)
                .unwrap_or(DecodeError::EmptyDocument)),
        }
    }
}

/// Body of an API error document (`api-base-error`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Server-provided explanation, when the document has one
    pub message: Option<String>,
}

/// Decoder with a configurable description transform.
///
/// The free functions [`parse_advert`], [`parse_listing`] and
/// [`parse_categories`] use a default decoder.
pub struct Decoder {
    transform: Box<dyn DescriptionTransform>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl Decoder {
    /// Decoder using [`HtmlToPlainText`] for descriptions.
    pub fn new() -> Self {
        Self::with_transform(HtmlToPlainText)
    }

    /// Decoder using a custom description transform.
    pub fn with_transform(transform: impl DescriptionTransform + 'static) -> Self {
        Decoder {
            transform: Box::new(transform),
        }
    }

    /// Decodes an `ad:ad` document.
    pub fn advert(&self, raw: &str) -> Decoded<Advert> {
        decode(raw, ADVERT_ROOT, |root, report| {
            build_advert(root, ADVERT_TAG_SCOPE, self.transform.as_ref(), report)
        })
    }

    /// Decodes an `ad:ads` document.
    pub fn listing(&self, raw: &str) -> Decoded<CategoryListing> {
        decode(raw, LISTING_ROOT, |root, report| {
            build_listing(root, self.transform.as_ref(), report)
        })
    }

    /// Decodes a `cat:categories` document.
    pub fn categories(&self, raw: &str) -> Decoded<Category> {
        decode(raw, CATEGORIES_ROOT, build_categories)
    }
}

/// Decodes a single advert response.
pub fn parse_advert(raw: &str) -> Decoded<Advert> {
    Decoder::new().advert(raw)
}

/// Decodes a category listing response.
pub fn parse_listing(raw: &str) -> Decoded<CategoryListing> {
    Decoder::new().listing(raw)
}

/// Decodes a category taxonomy response.
pub fn parse_categories(raw: &str) -> Decoded<Category> {
    Decoder::new().categories(raw)
}

/// Decodes an API error document, `None` for any other body.
pub fn parse_api_error(raw: &str) -> Option<ApiError> {
    let document = parse_document(raw).ok()?;
    let root = document.root();
    (root.name() == API_ERROR_ROOT).then(|| ApiError {
        message: api_error_message(root),
    })
}

fn decode<T>(
    raw: &str,
    expected: (&str, &str),
    build: impl FnOnce(&Element, &mut ErrorReport) -> Result<T, DecodeError>,
) -> Decoded<T> {
    let mut report = ErrorReport::new();
    let outcome = parse_document(raw).and_then(|document| {
        validate_root(document.root(), expected)?;
        build(document.root(), &mut report)
    });

    match outcome {
        Ok(record) => {
            if !report.is_empty() {
                log::debug!(
                    "Decoded <{}:{}> with {} field fallback(s)",
                    expected.0,
                    expected.1,
                    report.len()
                );
            }
            Decoded::complete(record, report)
        }
        Err(error) => {
            log::warn!("Decode of <{}:{}> aborted: {}", expected.0, expected.1, error);
            Decoded::aborted(error, report)
        }
    }
}

fn validate_root(root: &Element, (namespace, tag): (&str, &str)) -> Result<(), DecodeError> {
    if root.is(namespace, tag) {
        return Ok(());
    }
    let message = if root.name() == API_ERROR_ROOT {
        api_error_message(root)
    } else {
        None
    };
    Err(DecodeError::UnexpectedRoot {
        expected: QualifiedName::new(namespace, tag),
        found: root.qualified_name(),
        message,
    })
}

fn api_error_message(root: &Element) -> Option<String> {
    extract::find_descendant(root, "message")
        .map(|m| m.text().trim().to_string())
        .filter(|m| !m.is_empty())
}
