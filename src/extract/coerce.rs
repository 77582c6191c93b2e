//! Text coercions layered on top of extraction.

use chrono::{DateTime, Utc};

use super::FieldResult;
use crate::config::MINOR_UNITS_PER_MAJOR;
use crate::error_handling::FieldErrorKind;

pub fn to_uint(text: &str) -> FieldResult<u64> {
    text.trim()
        .parse::<u64>()
        .map_err(|e| FieldErrorKind::malformed(text, e))
}

/// Parses a finite floating-point number.
pub fn to_float(text: &str) -> FieldResult<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|e| FieldErrorKind::malformed(text, e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldErrorKind::malformed(text, "not a finite number"))
    }
}

pub fn to_timestamp(text: &str) -> FieldResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FieldErrorKind::malformed(text, e))
}

/// Converts a decimal amount to integer minor units: scale by 100, truncate.
///
/// Plain decimal notation (`12.34`, `7`, `.5`) is converted digit by digit so
/// the result never depends on binary floating-point representation
/// (`0.29` is 29, not 28). Other notations go through `f64`.
pub fn to_minor_units(text: &str) -> FieldResult<u64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if let Some(units) = plain_decimal_minor_units(unsigned) {
        return units.ok_or_else(|| FieldErrorKind::malformed(text, "amount out of range"));
    }

    let value = to_float(trimmed)?;
    if value < 0.0 {
        return Err(FieldErrorKind::malformed(text, "negative amount"));
    }
    let scaled = (value * MINOR_UNITS_PER_MAJOR as f64).trunc();
    if scaled >= u64::MAX as f64 {
        return Err(FieldErrorKind::malformed(text, "amount out of range"));
    }
    Ok(scaled as u64)
}

/// `None` when `text` is not plain decimal notation; `Some(None)` on overflow.
fn plain_decimal_minor_units(text: &str) -> Option<Option<u64>> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let whole = if whole.is_empty() {
        Some(0)
    } else {
        whole.parse::<u64>().ok()
    };
    let digit = |i: usize| fraction.as_bytes().get(i).map_or(0, |b| u64::from(b - b'0'));
    let cents = digit(0) * 10 + digit(1);

    Some(
        whole
            .and_then(|w| w.checked_mul(MINOR_UNITS_PER_MAJOR))
            .and_then(|w| w.checked_add(cents)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_uint() {
        assert_eq!(to_uint("55"), Ok(55));
        assert_eq!(to_uint(" 55 "), Ok(55));
        assert!(matches!(to_uint(""), Err(FieldErrorKind::Malformed { .. })));
        assert!(matches!(to_uint("-1"), Err(FieldErrorKind::Malformed { .. })));
        assert!(matches!(to_uint("5.5"), Err(FieldErrorKind::Malformed { .. })));
    }

    #[test]
    fn test_to_float_rejects_non_finite() {
        assert_eq!(to_float("-33.8688"), Ok(-33.8688));
        assert!(to_float("NaN").is_err());
        assert!(to_float("inf").is_err());
        assert!(to_float("north").is_err());
    }

    #[test]
    fn test_minor_units_truncate() {
        assert_eq!(to_minor_units("12.34"), Ok(1234));
        assert_eq!(to_minor_units("12.349"), Ok(1234));
        assert_eq!(to_minor_units("12.5"), Ok(1250));
        assert_eq!(to_minor_units("7"), Ok(700));
        assert_eq!(to_minor_units("7."), Ok(700));
        assert_eq!(to_minor_units(".05"), Ok(5));
        assert_eq!(to_minor_units("0.29"), Ok(29));
        assert_eq!(to_minor_units("+3.10"), Ok(310));
    }

    #[test]
    fn test_minor_units_exponent_notation() {
        assert_eq!(to_minor_units("1.5e2"), Ok(15000));
    }

    #[test]
    fn test_minor_units_rejects_garbage() {
        for bad in ["", "abc", "-5", "1,50", "99999999999999999999", "NaN"] {
            assert!(
                matches!(to_minor_units(bad), Err(FieldErrorKind::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_timestamp_requires_rfc3339() {
        assert!(to_timestamp("2019-03-02T10:20:30Z").is_ok());
        assert!(to_timestamp("2019-03-02T10:20:30.123+10:00").is_ok());
        assert!(to_timestamp("02/03/2019").is_err());
        assert!(to_timestamp("2019-03-02 10:20:30").is_err());
    }
}
