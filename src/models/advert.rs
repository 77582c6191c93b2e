//! Advert record and its nested sub-records.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single classifieds advert.
///
/// Only `id` is guaranteed by the wire format. Every other field is either
/// what the document said or its documented default, and the decode call's
/// error list says which.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advert {
    /// Advert identifier (`@id` on `ad:ad`)
    pub id: u64,
    /// Ad type (`OFFERED`, `WANTED`, ...)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Account that posted the advert
    pub user_id: Option<u64>,
    /// Lifecycle status (`ACTIVE`, `EXPIRED`, ...)
    pub status: Option<String>,
    /// `PRIVATE` or `COMMERCIAL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_type: Option<String>,
    /// Title, empty when absent
    pub title: String,
    /// Description as sent by the API (HTML)
    #[serde(rename = "desc_excerpt_html", skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    /// Plain-text rendering of the description, base64 encoded
    #[serde(rename = "desc_excerpt_plain_b64", skip_serializing_if = "Option::is_none")]
    pub description_plain_b64: Option<String>,
    /// Asking price
    pub price: Price,
    /// Poster contact details
    pub contact: Contact,
    /// Category the advert is filed under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    /// Address, coordinate and locality hierarchy
    #[serde(rename = "positions")]
    pub position: Position,
    /// Pictures in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<Picture>,
    /// Attributes in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Lifecycle instants
    pub timestamp: Timestamps,
}

/// Asking price. Amounts are integer minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    /// Price type (`FIXED`, `NEGOTIABLE`, ...), `"UNKNOWN"` when absent
    #[serde(rename = "type")]
    pub price_type: String,
    /// Amount in minor units, 0 when absent
    pub amount: u64,
    /// Highest offer in minor units, 0 when absent
    pub highest_amount: u64,
    /// ISO 4217 code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Localized currency symbol (`$`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

/// How to reach the poster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Contact {
    /// Display name of the poster
    pub name: Option<String>,
    /// Phone number with all spaces removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The category an advert is filed under.
///
/// Only exists when the category element carries a usable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    /// Category identifier
    pub id: u64,
    /// Localized display name
    pub name: String,
    /// URL slug (`id-name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Slug of the top-level ancestor (`l1-name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slug: Option<String>,
    /// Number of subcategories, 0 when absent
    pub children_count: u64,
}

/// Where the advert is located.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Position {
    /// Full street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City or suburb
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Set only when both longitude and latitude parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    /// Locality hierarchy in document order
    pub locations: Vec<Location>,
}

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Longitude
    pub longitude: f64,
    /// Latitude
    pub latitude: f64,
}

/// One level of the locality hierarchy (suburb, region, state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Location identifier, 0 when absent
    pub id: u64,
    /// Localized name, empty when absent
    pub name: String,
    /// Enclosing location
    pub parent_id: Option<u64>,
}

/// Size variants of one advert picture. Each variant is an image URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Picture {
    /// `thumbnail` link
    #[serde(rename = "thumbnail_url", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// `normal` link
    #[serde(rename = "normal_url", skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    /// `large` link
    #[serde(rename = "large_url", skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    /// `extraLarge` link
    #[serde(rename = "extra_large_url", skip_serializing_if = "Option::is_none")]
    pub extra_large: Option<String>,
    /// `extraExtraLarge` link
    #[serde(rename = "extra_2x_large_url", skip_serializing_if = "Option::is_none")]
    pub extra_extra_large: Option<String>,
}

/// A key/value attribute (e.g. `condition = used`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Machine name of the key, empty when absent
    pub key_slug: String,
    /// Localized key label, empty when absent
    pub key_name: String,
    /// Declared value type (`ENUM`, `STRING`, ...)
    pub value_type: Option<String>,
    /// Machine value
    pub value_slug: Option<String>,
    /// Localized value label
    pub value_name: Option<String>,
}

/// Lifecycle instants, normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Timestamps {
    /// When the advert was created
    #[serde(rename = "creation_time")]
    pub creation: Option<DateTime<Utc>>,
    /// Last modification
    #[serde(rename = "modification_time")]
    pub modification: Option<DateTime<Utc>>,
    /// Start of the listing period
    #[serde(rename = "start_time")]
    pub start: Option<DateTime<Utc>>,
    /// End of the listing period
    #[serde(rename = "end_time")]
    pub end: Option<DateTime<Utc>>,
}
