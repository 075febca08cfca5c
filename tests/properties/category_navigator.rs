//! Property tests for category tree navigation.

use std::borrow::Cow;

use proptest::prelude::*;

use bazaar::{
    all_leaves, filter, find_by_id, find_by_slug, path_to, sort_by_weight, walk, Category,
    CategoryWeights,
};

const SLUGS: &[&str] = &["mens", "womens", "kids", "shoes", "vintage", "home", "uncategorised"];

fn shape() -> impl Strategy<Value = Vec<Category>> {
    let leaf = "[A-Za-z ]{1,12}".prop_map(|name| Category::new(0, name, ""));
    let node = leaf.prop_recursive(4, 48, 5, |inner| {
        ("[A-Za-z ]{1,12}", proptest::collection::vec(inner, 0..5))
            .prop_map(|(name, children)| Category::new(0, name, "").with_children(children))
    });
    proptest::collection::vec(node, 0..6)
}

/// Give every node a unique id and slug, pre-order.
fn tree() -> impl Strategy<Value = Vec<Category>> {
    shape().prop_map(|mut roots| {
        let mut next = 1;
        number(&mut roots, None, &mut next);
        roots
    })
}

fn number(nodes: &mut [Category], parent_id: Option<i64>, next: &mut i64) {
    for node in nodes {
        node.id = *next;
        node.parent_id = parent_id;
        node.slug = match SLUGS.get((*next - 1) as usize) {
            Some(known) => known.to_string(),
            None => format!("category-{}", next),
        };
        *next += 1;
        number(&mut node.children, Some(node.id), next);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every walked node can be found by slug and by id, and its
    /// path runs from a root down to it.
    #[test]
    fn property_every_node_is_reachable(tree in tree()) {
        for node in walk(&tree) {
            prop_assert_eq!(find_by_slug(&tree, &node.slug), Some(node));
            prop_assert_eq!(find_by_id(&tree, node.id), Some(node));

            let path = path_to(&tree, &node.slug);
            prop_assert!(!path.is_empty());
            prop_assert!(tree.iter().any(|root| root == path[0]));
            prop_assert_eq!(path[path.len() - 1], node);
            for pair in path.windows(2) {
                prop_assert!(pair[0].children.iter().any(|c| c == pair[1]));
            }
        }
    }

    /// PROPERTY: leaves are exactly the childless nodes, in walk order.
    #[test]
    fn property_leaves_match_walk(tree in tree()) {
        let expected: Vec<&Category> = walk(&tree).filter(|c| c.children.is_empty()).collect();
        prop_assert_eq!(all_leaves(&tree), expected);
    }

    /// PROPERTY: a blank filter borrows the input unchanged.
    #[test]
    fn property_blank_filter_is_identity(tree in tree(), blank in "[ \t]{0,4}") {
        let filtered = filter(&tree, &blank);
        prop_assert!(matches!(filtered, Cow::Borrowed(_)));
        prop_assert_eq!(&*filtered, tree.as_slice());
    }

    /// PROPERTY: filter keeps only top-level nodes, in order.
    #[test]
    fn property_filter_keeps_subsequence(tree in tree(), term in "[a-z]{1,3}") {
        let filtered = filter(&tree, &term);
        let mut remaining = tree.iter();
        for kept in filtered.iter() {
            prop_assert!(remaining.any(|root| root == kept));
        }
    }

    /// PROPERTY: sorting is a permutation with non-increasing weights, and
    /// equal weights keep their input order.
    #[test]
    fn property_sort_by_weight_is_stable(tree in tree()) {
        let weights = CategoryWeights::default();
        let sorted = sort_by_weight(&tree, &weights);
        prop_assert_eq!(sorted.len(), tree.len());

        for pair in sorted.windows(2) {
            let (a, b) = (weights.weight_of(&pair[0].slug), weights.weight_of(&pair[1].slug));
            prop_assert!(a >= b);
            if a == b {
                let pos = |slug: &str| tree.iter().position(|c| c.slug == slug);
                prop_assert!(pos(&pair[0].slug) < pos(&pair[1].slug));
            }
        }
    }
}
