//! Paginated collection of adverts.

use serde::Serialize;

use super::Advert;

/// One page of adverts from a category search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    /// Adverts in document order
    #[serde(rename = "ads")]
    pub adverts: Vec<Advert>,
    /// Always set on a successfully decoded listing
    pub pagination: Option<Pagination>,
}

/// Position of this page within the full result set. Every count is 0 when
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    /// Page index as reported by the search
    #[serde(rename = "current")]
    pub current_page: u64,
    /// Adverts per page
    pub page_size: u64,
    /// Total adverts matching the search
    #[serde(rename = "entry_size")]
    pub matched_entries: u64,
}
