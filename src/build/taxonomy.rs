//! Recursive category taxonomy builder.

use crate::error_handling::{resolve, DecodeError, ErrorReport, FieldErrorKind};
use crate::extract;
use crate::models::Category;
use crate::xml::Element;

use super::optional;

/// Builds the taxonomy tree under a `cat:categories` element.
///
/// The top `category` element must exist and carry an id, otherwise there
/// is no tree and the build fails with [`DecodeError::MissingIdentifier`].
/// Nested categories without a usable id are left out of their parent's
/// subcategories.
pub fn build_categories(root: &Element, report: &mut ErrorReport) -> Result<Category, DecodeError> {
    let top = extract::find(root, "category").ok_or_else(|| DecodeError::MissingIdentifier {
        tag: "categories/category".to_string(),
        kind: FieldErrorKind::Absent,
    })?;
    let id = extract::uint_attr(top, "id").map_err(|kind| DecodeError::MissingIdentifier {
        tag: "categories/category/id".to_string(),
        kind,
    })?;
    Ok(build_node(top, id, report))
}

fn build_node(category: &Element, id: u64, report: &mut ErrorReport) -> Category {
    let tag = |field: &str| format!("categories/category/{id}/{field}");

    let name = resolve(
        extract::text(category, "cat:localized-name"),
        String::new(),
        tag("name"),
        report,
    );
    let slug = resolve(
        extract::text(category, "cat:id-name"),
        String::new(),
        tag("slug"),
        report,
    );
    let parent_id = optional(
        extract::uint(category, "cat:parent-id"),
        tag("parent_id"),
        report,
    );
    let parent_slug = optional(
        extract::text(category, "cat:l1-name"),
        tag("parent_slug"),
        report,
    );
    let children_count = resolve(
        extract::uint(category, "cat:children-count"),
        0,
        tag("children_count"),
        report,
    );

    let subcategories = extract::find_all(category, "cat:category")
        .into_iter()
        .filter_map(|child| match extract::uint_attr(child, "id") {
            Ok(child_id) => Some(build_node(child, child_id, report)),
            Err(kind) => {
                log::debug!("Dropping subcategory of {} without usable id: {}", id, kind);
                None
            }
        })
        .collect();

    Category {
        id,
        name,
        slug,
        parent_id,
        parent_slug,
        children_count,
        subcategories,
        is_root: id == 0,
    }
}
