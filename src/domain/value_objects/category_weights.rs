//! Display-priority table for top-level categories
//!
//! A hardcoded ordering heuristic, not a relevance score: higher weights are
//! shown first and slugs missing from the table fall back to a mid-range
//! default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weight given to any slug without an explicit entry.
pub const DEFAULT_CATEGORY_WEIGHT: i32 = 5;

const BUILTIN_WEIGHTS: &[(&str, i32)] = &[
    ("mens", 10),
    ("womens", 9),
    ("kids", 8),
    ("shoes", 7),
    ("accessories", 6),
    ("home", 4),
    ("collectibles", 3),
    ("vintage", 2),
    ("other", 1),
    ("uncategorised", 0),
];

/// Slug to priority lookup used by `sort_by_weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeights {
    weights: BTreeMap<String, i32>,
    default_weight: i32,
}

impl CategoryWeights {
    /// An empty table where every slug gets `default_weight`.
    pub fn new(default_weight: i32) -> Self {
        Self {
            weights: BTreeMap::new(),
            default_weight,
        }
    }

    pub fn with_weight(mut self, slug: impl Into<String>, weight: i32) -> Self {
        self.set(slug, weight);
        self
    }

    pub fn set(&mut self, slug: impl Into<String>, weight: i32) {
        self.weights.insert(slug.into(), weight);
    }

    pub fn set_default_weight(&mut self, weight: i32) {
        self.default_weight = weight;
    }

    pub fn default_weight(&self) -> i32 {
        self.default_weight
    }

    /// Priority of `slug`, or the default when the table has no entry.
    pub fn weight_of(&self, slug: &str) -> i32 {
        self.weights
            .get(slug)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, i32)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        BUILTIN_WEIGHTS.iter().fold(
            Self::new(DEFAULT_CATEGORY_WEIGHT),
            |table, (slug, weight)| table.with_weight(*slug, *weight),
        )
    }
}
