//! Category tree navigator
//!
//! Read-only queries over a category tree supplied by the search backend.
//! Every function here is total: a missing slug yields `None` or an empty
//! list, never an error.
//!
//! Trees are owned values (`Vec<Category>` all the way down), so a cycle
//! cannot be represented and recursion depth equals the tree depth.

use std::borrow::Cow;
use std::cmp::Reverse;

use crate::domain::entities::Category;
use crate::domain::value_objects::CategoryWeights;

/// Pre-order iterator over every node of a forest.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<std::slice::Iter<'a, Category>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Category;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    self.stack.push(node.children.iter());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Visit each node before its children, children in list order.
pub fn walk(tree: &[Category]) -> Walk<'_> {
    Walk {
        stack: vec![tree.iter()],
    }
}

/// First node in pre-order whose slug equals `slug`.
///
/// Slugs are expected to be unique; if they are not, the earliest one in
/// pre-order wins.
pub fn find_by_slug<'a>(tree: &'a [Category], slug: &str) -> Option<&'a Category> {
    walk(tree).find(|node| node.slug == slug)
}

/// First node in pre-order with the given id.
pub fn find_by_id(tree: &[Category], id: i64) -> Option<&Category> {
    walk(tree).find(|node| node.id == id)
}

/// Nodes from the root down to the node with `slug`, inclusive.
///
/// An empty vector means the slug is not in the tree.
pub fn path_to<'a>(tree: &'a [Category], slug: &str) -> Vec<&'a Category> {
    for node in tree {
        if node.slug == slug {
            return vec![node];
        }
        let mut below = path_to(&node.children, slug);
        if !below.is_empty() {
            below.insert(0, node);
            return below;
        }
    }
    Vec::new()
}

/// Every node without children, in pre-order.
pub fn all_leaves(tree: &[Category]) -> Vec<&Category> {
    walk(tree).filter(|node| node.is_leaf()).collect()
}

/// Keep the nodes whose name or description contains `term`
/// (trimmed, case-insensitive), plus every ancestor of such a node.
///
/// A blank term returns the input untouched. A retained node keeps its full
/// original `children` list, including children that did not match.
pub fn filter<'a>(tree: &'a [Category], term: &str) -> Cow<'a, [Category]> {
    let term = term.trim();
    if term.is_empty() {
        return Cow::Borrowed(tree);
    }
    let needle = term.to_lowercase();
    Cow::Owned(
        tree.iter()
            .filter(|node| matches_in_subtree(node, &needle))
            .cloned()
            .collect(),
    )
}

fn matches_in_subtree(node: &Category, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
        || node.description.to_lowercase().contains(needle)
        || node
            .children
            .iter()
            .any(|child| matches_in_subtree(child, needle))
}

/// Stable sort by descending display weight.
///
/// Slugs missing from `weights` get its default weight; equal weights keep
/// their input order.
pub fn sort_by_weight(categories: &[Category], weights: &CategoryWeights) -> Vec<Category> {
    let mut sorted = categories.to_vec();
    sorted.sort_by_key(|category| Reverse(weights.weight_of(&category.slug)));
    sorted
}
