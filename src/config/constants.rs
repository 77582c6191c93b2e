//! Wire-contract constants.

/// Root element (namespace prefix, tag) of a single advert response.
pub const ADVERT_ROOT: (&str, &str) = ("ad", "ad");

/// Root element (namespace prefix, tag) of a category listing response.
pub const LISTING_ROOT: (&str, &str) = ("ad", "ads");

/// Root element (namespace prefix, tag) of a category taxonomy response.
pub const CATEGORIES_ROOT: (&str, &str) = ("cat", "categories");

/// Local tag of the document the API sends instead of the requested entity
/// when a request fails.
pub const API_ERROR_ROOT: &str = "api-base-error";

/// Price type used when the document does not state one.
pub const UNKNOWN_PRICE_TYPE: &str = "UNKNOWN";

/// Minor currency units per major unit (cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Picture size variants: `rel` value on the wire, field name in error tags.
pub const PICTURE_VARIANTS: [(&str, &str); 5] = [
    ("thumbnail", "thumbnail"),
    ("normal", "normal"),
    ("large", "large"),
    ("extraLarge", "extraLarge"),
    ("extraExtraLarge", "extra2XLarge"),
];

/// Deepest element nesting accepted in a response body. The deepest real
/// document, the category taxonomy, is a handful of levels.
pub const MAX_DEPTH: usize = 256;

/// Tag scope of a stand-alone advert's fields; listing adverts are indexed
/// (`ads/ad[3]`).
pub const ADVERT_TAG_SCOPE: &str = "ads/ad";

/// Input path that designates standard input.
pub const STDIN_MARKER: &str = "-";
