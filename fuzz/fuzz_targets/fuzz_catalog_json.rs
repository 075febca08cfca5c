#![no_main]

use libfuzzer_sys::fuzz_target;

use bazaar::infrastructure::parse_catalog;
use bazaar::{all_leaves, filter, path_to, sort_by_weight, walk, CategoryWeights};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(tree) = parse_catalog(content, std::path::Path::new("tree.json")) {
            let _ = walk(&tree).count();
            let _ = all_leaves(&tree);
            let _ = filter(&tree, "a");
            let _ = sort_by_weight(&tree, &CategoryWeights::default());
            if let Some(last) = walk(&tree).last() {
                let _ = path_to(&tree, &last.slug);
            }
        }
    }
});
