//! Read-side attribute listing with filters and offset pagination.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use vitrine_core::{AttributeId, CategoryId, ProductTypeId};

use crate::attribute::Attribute;
use crate::catalog::Catalog;

/// Pagination parameters for attribute listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of attributes to return.
    pub limit: u32,
    /// Offset for pagination (0-based).
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(50).min(1000),
            offset: offset.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeFilter {
    /// Only attributes used by products in this category or its descendants.
    pub in_category: Option<CategoryId>,
    pub id: Option<AttributeId>,
}

/// One page of attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeConnection {
    pub edges: Vec<Attribute>,
    /// Matches across all pages.
    pub total: u64,
    pub pagination: Pagination,
    pub has_more: bool,
}

impl Catalog {
    /// The category and every category below it.
    pub fn category_tree(&self, root: CategoryId) -> HashSet<CategoryId> {
        let mut tree = HashSet::new();
        if self.category(root).is_none() {
            return tree;
        }
        tree.insert(root);
        let mut frontier = vec![root];
        while let Some(parent) = frontier.pop() {
            for child in self.categories.iter().filter(|c| c.parent == Some(parent)) {
                if tree.insert(child.id) {
                    frontier.push(child.id);
                }
            }
        }
        tree
    }

    fn product_types_in(&self, category: CategoryId) -> HashSet<ProductTypeId> {
        let tree = self.category_tree(category);
        self.products
            .iter()
            .filter(|p| tree.contains(&p.category))
            .map(|p| p.product_type)
            .collect()
    }

    pub fn query_attributes(&self, filter: &AttributeFilter, pagination: Pagination) -> AttributeConnection {
        let used_by: Option<Vec<_>> = filter.in_category.map(|category| {
            let types = self.product_types_in(category);
            self.product_types
                .iter()
                .filter(|t| types.contains(&t.id))
                .collect()
        });

        let matching: Vec<&Attribute> = self
            .attributes
            .iter()
            .filter(|a| filter.id.is_none_or(|id| a.id == id))
            .filter(|a| {
                used_by
                    .as_ref()
                    .is_none_or(|types| types.iter().any(|t| t.uses(a.id)))
            })
            .collect();

        let total = matching.len() as u64;
        let edges: Vec<Attribute> = matching
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect();
        let has_more = u64::from(pagination.offset) + (edges.len() as u64) < total;

        AttributeConnection {
            edges,
            total,
            pagination,
            has_more,
        }
    }
}
