//! Category taxonomy tree.

use serde::Serialize;

/// One node of the category taxonomy, owning its subcategories.
///
/// The tree is built once per decode call and never mutated afterwards.
/// Nodes whose id could not be read are not part of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category identifier
    pub id: u64,
    /// Localized display name, empty when absent
    pub name: String,
    /// URL slug, empty when absent
    pub slug: String,
    /// Identifier of the enclosing category
    pub parent_id: Option<u64>,
    /// Slug of the top-level ancestor
    pub parent_slug: Option<String>,
    /// Number of subcategories declared by the API, 0 when absent
    pub children_count: u64,
    /// Subcategories in document order
    pub subcategories: Vec<Category>,
    /// Whether this is the taxonomy root (id 0)
    pub is_root: bool,
}

impl Category {
    /// Length of the longest root-to-leaf chain, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .subcategories
            .iter()
            .map(Category::depth)
            .max()
            .unwrap_or(0)
    }

    /// Depth-first search for the node with this id.
    pub fn find(&self, id: u64) -> Option<&Category> {
        if self.id == id {
            return Some(self);
        }
        self.subcategories.iter().find_map(|c| c.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64, subcategories: Vec<Category>) -> Category {
        Category {
            id,
            name: String::new(),
            slug: String::new(),
            parent_id: None,
            parent_slug: None,
            children_count: subcategories.len() as u64,
            subcategories,
            is_root: id == 0,
        }
    }

    #[test]
    fn test_depth_counts_longest_chain() {
        let tree = node(0, vec![node(1, vec![node(3, vec![])]), node(2, vec![])]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(node(9, vec![]).depth(), 1);
    }

    #[test]
    fn test_find_searches_whole_tree() {
        let tree = node(0, vec![node(1, vec![node(3, vec![])]), node(2, vec![])]);
        assert_eq!(tree.find(3).map(|c| c.id), Some(3));
        assert!(tree.find(4).is_none());
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let json = serde_json::to_value(node(0, vec![])).unwrap();
        assert_eq!(json["is_root"], true);
        assert_eq!(json["children_count"], 0);
        assert!(json["subcategories"].as_array().unwrap().is_empty());
        assert!(json["parent_id"].is_null());
    }
}
