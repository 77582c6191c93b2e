//! Fallback policy and the per-call error list.
//!
//! Every optional field of every builder is resolved through [`resolve`]:
//! an extracted value is returned as-is, a failed extraction is recorded
//! under its wire-path tag and replaced by the declared default.

use super::types::{DecodeError, FieldErrorKind};

/// Append-only error list owned by a single decode call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    errors: Vec<DecodeError>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error. Entries are never removed or reordered.
    pub fn push(&mut self, error: DecodeError) {
        self.errors.push(error);
    }

    /// Records a soft failure of the field identified by `tag`.
    pub fn push_field(&mut self, tag: impl Into<String>, kind: FieldErrorKind) {
        let tag = tag.into();
        log::debug!("Falling back to default for {}: {}", tag, kind);
        self.push(DecodeError::Field { tag, kind });
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &DecodeError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<DecodeError> {
        self.errors
    }
}

/// Returns the extracted value, or records `tag` and returns `fallback`.
///
/// Never fails: the outcome of a bad field is always a value plus, at most,
/// one new entry in `report`.
pub fn resolve<T>(
    extracted: Result<T, FieldErrorKind>,
    fallback: T,
    tag: impl Into<String>,
    report: &mut ErrorReport,
) -> T {
    match extracted {
        Ok(value) => value,
        Err(kind) => {
            report.push_field(tag, kind);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_returns_value_without_recording() {
        let mut report = ErrorReport::new();
        let value = resolve(Ok(42u64), 0, "ads/ad/user_id", &mut report);
        assert_eq!(value, 42);
        assert!(report.is_empty());
    }

    #[test]
    fn test_resolve_records_tag_and_returns_fallback() {
        let mut report = ErrorReport::new();
        let value = resolve(
            Err(FieldErrorKind::Absent),
            "UNKNOWN".to_string(),
            "ads/ad/price/type",
            &mut report,
        );
        assert_eq!(value, "UNKNOWN");
        assert_eq!(report.len(), 1);
        let first = report.iter().next().unwrap();
        assert_eq!(first.tag(), Some("ads/ad/price/type"));
        assert!(!first.is_critical());
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let mut report = ErrorReport::new();
        resolve::<u64>(Err(FieldErrorKind::Absent), 0, "first", &mut report);
        resolve(Ok(1u64), 0, "skipped", &mut report);
        resolve::<u64>(
            Err(FieldErrorKind::malformed("x", "bad")),
            0,
            "second",
            &mut report,
        );
        let tags: Vec<_> = report.iter().filter_map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["first", "second"]);
    }

    #[test]
    fn test_resolve_keeps_present_zero() {
        // A genuine zero on the wire is a value, not a fallback
        let mut report = ErrorReport::new();
        assert_eq!(resolve(Ok(0u64), 7, "count", &mut report), 0);
        assert!(report.is_empty());
    }
}
