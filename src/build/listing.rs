//! Category-listing builder.

use crate::config::ADVERT_TAG_SCOPE;
use crate::error_handling::{resolve, DecodeError, ErrorReport};
use crate::extract;
use crate::models::{CategoryListing, Pagination};
use crate::xml::Element;

use super::advert::build_advert;
use super::description::DescriptionTransform;

/// Builds a [`CategoryListing`] from an `ad:ads` element.
///
/// Adverts are built in document order, each tagging its errors with its
/// zero-based position (`ads/ad[0]/title`). The first advert that cannot be
/// identified aborts the whole listing: a page with an unusable advert is
/// not returned partially.
pub fn build_listing(
    root: &Element,
    transform: &dyn DescriptionTransform,
    report: &mut ErrorReport,
) -> Result<CategoryListing, DecodeError> {
    let mut adverts = Vec::new();
    for (position, ad) in extract::find_all(root, "ad").into_iter().enumerate() {
        let scope = format!("{ADVERT_TAG_SCOPE}[{position}]");
        let advert = build_advert(ad, &scope, transform, report).map_err(|e| {
            log::debug!("Advert #{} of the listing is unusable: {}", position, e);
            e
        })?;
        adverts.push(advert);
    }

    let pagination = build_pagination(root, report);

    Ok(CategoryListing {
        adverts,
        pagination: Some(pagination),
    })
}

fn build_pagination(root: &Element, report: &mut ErrorReport) -> Pagination {
    Pagination {
        current_page: resolve(
            extract::uint(root, "ad:ads-search-options/ad:page"),
            0,
            "category/root/current",
            report,
        ),
        page_size: resolve(
            extract::uint(root, "ad:ads-search-options/ad:size"),
            0,
            "category/root/size",
            report,
        ),
        matched_entries: resolve(
            extract::uint(root, "types:paging/types:numFound"),
            0,
            "category/matched_entries",
            report,
        ),
    }
}
