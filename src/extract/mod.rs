//! Path-based field extraction.
//!
//! Every accessor returns a value or a [`FieldErrorKind`]; nothing here
//! panics or raises. Missing intermediate nodes resolve to
//! [`FieldErrorKind::Absent`], coercion failures to
//! [`FieldErrorKind::Malformed`].
//!
//! Text values are whitespace-trimmed before they are returned or coerced.

mod coerce;
mod path;

use chrono::{DateTime, Utc};

use crate::error_handling::FieldErrorKind;
use crate::xml::Element;

pub use coerce::{to_float, to_minor_units, to_timestamp, to_uint};

/// Result of a single field extraction.
pub type FieldResult<T> = Result<T, FieldErrorKind>;

/// First element at `path` relative to `node`.
pub fn find<'a>(node: &'a Element, path: &str) -> Option<&'a Element> {
    path::find_first(node, &path::steps(path))
}

/// Every element at `path` relative to `node`, in document order.
pub fn find_all<'a>(node: &'a Element, path: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    path::find_every(node, &path::steps(path), &mut found);
    found
}

/// First descendant of `node` (or `node` itself) with this local name.
pub fn find_descendant<'a>(node: &'a Element, name: &str) -> Option<&'a Element> {
    node.descendants().find(|e| e.name() == name)
}

/// Trimmed text of the element at `path`.
pub fn text(node: &Element, path: &str) -> FieldResult<String> {
    find(node, path)
        .map(|e| e.text().trim().to_string())
        .ok_or(FieldErrorKind::Absent)
}

/// Value of attribute `name` on `node`.
pub fn attr(node: &Element, name: &str) -> FieldResult<String> {
    node.attribute(name)
        .map(|v| v.trim().to_string())
        .ok_or(FieldErrorKind::Absent)
}

/// Value of attribute `name` on the element at `path`.
pub fn attr_at(node: &Element, path: &str, name: &str) -> FieldResult<String> {
    find(node, path)
        .ok_or(FieldErrorKind::Absent)
        .and_then(|e| attr(e, name))
}

pub fn uint(node: &Element, path: &str) -> FieldResult<u64> {
    text(node, path).and_then(|t| to_uint(&t))
}

pub fn uint_attr(node: &Element, name: &str) -> FieldResult<u64> {
    attr(node, name).and_then(|t| to_uint(&t))
}

pub fn float(node: &Element, path: &str) -> FieldResult<f64> {
    text(node, path).and_then(|t| to_float(&t))
}

/// RFC 3339 date-time at `path`, normalized to UTC.
pub fn timestamp(node: &Element, path: &str) -> FieldResult<DateTime<Utc>> {
    text(node, path).and_then(|t| to_timestamp(&t))
}

/// Decimal amount at `path` in integer minor units (× 100, truncated).
pub fn money(node: &Element, path: &str) -> FieldResult<u64> {
    text(node, path).and_then(|t| to_minor_units(&t))
}
