//! Record builders.
//!
//! Each builder turns a validated element into one domain record. Builders
//! never see raw text: root identity has already been checked by the caller,
//! and every soft failure goes into the caller's [`ErrorReport`].

mod advert;
mod description;
mod listing;
mod taxonomy;

use crate::error_handling::{resolve, ErrorReport};
use crate::extract::FieldResult;


// Re-export public API
pub use advert::build_advert;
pub use description::{DescriptionTransform, HtmlToPlainText};
pub use listing::build_listing;
pub use taxonomy::build_categories;

/// Resolves a field whose default is "absent".
fn optional<T>(
    extracted: FieldResult<T>,
    tag: impl Into<String>,
    report: &mut ErrorReport,
) -> Option<T> {
    resolve(extracted.map(Some), None, tag, report)
}
