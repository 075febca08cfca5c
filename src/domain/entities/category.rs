//! Category entity - a node in the product category tree
//!
//! Trees arrive wholesale from the search backend and are never mutated;
//! navigation lives in `domain::services::category_navigator`.

use serde::{Deserialize, Serialize};

/// A category and its (possibly empty) list of sub-categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Unique lookup key across the whole tree
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub children: Vec<Category>,
    #[serde(default)]
    pub product_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            children: Vec::new(),
            product_count: 0,
            image: None,
            parent_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach children, pointing their `parent_id` at this node.
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = children
            .into_iter()
            .map(|mut child| {
                child.parent_id = Some(self.id);
                child
            })
            .collect();
        self
    }

    pub fn with_product_count(mut self, product_count: u64) -> Self {
        self.product_count = product_count;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// A leaf has no sub-categories and is directly browsable.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
