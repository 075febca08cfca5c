//! Category Query Use Case
//!
//! Loads a tree from a `CategorySource` and runs one navigator query on it,
//! the way the discovery screen does after each fetch.

use tracing::debug;

use crate::domain::entities::Category;
use crate::domain::ports::CategorySource;
use crate::domain::services::category_navigator;
use crate::domain::value_objects::CategoryWeights;
use crate::error::BazaarResult;

/// A navigator query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryQuery {
    Find { slug: String },
    Path { slug: String },
    Leaves,
    Filter { term: String },
    Sort,
}

impl CategoryQuery {
    pub fn name(&self) -> &'static str {
        match self {
            CategoryQuery::Find { .. } => "find",
            CategoryQuery::Path { .. } => "path",
            CategoryQuery::Leaves => "leaves",
            CategoryQuery::Filter { .. } => "filter",
            CategoryQuery::Sort => "sort",
        }
    }
}

/// Query results are detached copies of the matching nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryQueryResult {
    /// `find`: the node, if present
    Node(Option<Category>),
    /// `path`, `leaves`, `filter`, `sort`: nodes in result order
    Nodes(Vec<Category>),
}

impl CategoryQueryResult {
    /// Number of nodes returned
    pub fn len(&self) -> usize {
        match self {
            CategoryQueryResult::Node(node) => usize::from(node.is_some()),
            CategoryQueryResult::Nodes(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nodes(&self) -> &[Category] {
        match self {
            CategoryQueryResult::Node(node) => node.as_slice(),
            CategoryQueryResult::Nodes(nodes) => nodes,
        }
    }
}

pub struct CategoryQueryUseCase<S: CategorySource> {
    source: S,
    weights: CategoryWeights,
}

impl<S: CategorySource> CategoryQueryUseCase<S> {
    pub fn new(source: S, weights: CategoryWeights) -> Self {
        Self { source, weights }
    }

    pub fn execute(&self, query: &CategoryQuery) -> BazaarResult<CategoryQueryResult> {
        let tree = self.source.load_tree()?;
        let result = run_query(&tree, query, &self.weights);
        debug!(query = query.name(), results = result.len(), "ran category query");
        Ok(result)
    }
}

/// Run a query against an already loaded tree.
pub fn run_query(
    tree: &[Category],
    query: &CategoryQuery,
    weights: &CategoryWeights,
) -> CategoryQueryResult {
    match query {
        CategoryQuery::Find { slug } => {
            CategoryQueryResult::Node(category_navigator::find_by_slug(tree, slug).cloned())
        }
        CategoryQuery::Path { slug } => CategoryQueryResult::Nodes(
            category_navigator::path_to(tree, slug)
                .into_iter()
                .cloned()
                .collect(),
        ),
        CategoryQuery::Leaves => CategoryQueryResult::Nodes(
            category_navigator::all_leaves(tree)
                .into_iter()
                .cloned()
                .collect(),
        ),
        CategoryQuery::Filter { term } => {
            CategoryQueryResult::Nodes(category_navigator::filter(tree, term).into_owned())
        }
        CategoryQuery::Sort => {
            CategoryQueryResult::Nodes(category_navigator::sort_by_weight(tree, weights))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct InMemorySource {
        tree: Vec<Category>,
        loads: Cell<usize>,
    }

    impl CategorySource for InMemorySource {
        fn load_tree(&self) -> BazaarResult<Vec<Category>> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.tree.clone())
        }
    }

    fn use_case() -> CategoryQueryUseCase<InMemorySource> {
        let tree = vec![
            Category::new(9, "Uncategorised", "uncategorised"),
            Category::new(1, "Mens", "mens").with_children(vec![
                Category::new(2, "Jeans", "mens-jeans"),
                Category::new(3, "Shoes", "mens-shoes"),
            ]),
        ];
        CategoryQueryUseCase::new(
            InMemorySource {
                tree,
                loads: Cell::new(0),
            },
            CategoryWeights::default(),
        )
    }

    fn slugs(result: &CategoryQueryResult) -> Vec<&str> {
        result.nodes().iter().map(|c| c.slug.as_str()).collect()
    }

    #[test]
    fn find_returns_clone_of_node() {
        let result = use_case()
            .execute(&CategoryQuery::Find {
                slug: "mens-shoes".into(),
            })
            .unwrap();
        assert_eq!(slugs(&result), vec!["mens-shoes"]);
    }

    #[test]
    fn find_missing_is_empty() {
        let result = use_case()
            .execute(&CategoryQuery::Find {
                slug: "kids".into(),
            })
            .unwrap();
        assert_eq!(result, CategoryQueryResult::Node(None));
        assert!(result.is_empty());
    }

    #[test]
    fn path_and_leaves() {
        let uc = use_case();
        let path = uc
            .execute(&CategoryQuery::Path {
                slug: "mens-jeans".into(),
            })
            .unwrap();
        assert_eq!(slugs(&path), vec!["mens", "mens-jeans"]);

        let leaves = uc.execute(&CategoryQuery::Leaves).unwrap();
        assert_eq!(slugs(&leaves), vec!["uncategorised", "mens-jeans", "mens-shoes"]);
    }

    #[test]
    fn every_execute_reloads_the_tree() {
        let uc = use_case();
        uc.execute(&CategoryQuery::Leaves).unwrap();
        uc.execute(&CategoryQuery::Sort).unwrap();
        assert_eq!(uc.source.loads.get(), 2);
    }

    #[test]
    fn sort_and_filter() {
        let uc = use_case();
        let sorted = uc.execute(&CategoryQuery::Sort).unwrap();
        assert_eq!(slugs(&sorted), vec!["mens", "uncategorised"]);

        let filtered = uc
            .execute(&CategoryQuery::Filter {
                term: "jean".into(),
            })
            .unwrap();
        assert_eq!(slugs(&filtered), vec!["mens"]);
    }
}
