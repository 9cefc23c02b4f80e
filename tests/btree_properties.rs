//! Property tests for the B-tree index.
//!
//! Every reachable state must keep keys ordered and unique, keep all leaves at
//! one depth, and keep non-root nodes within `[t - 1, 2t - 1]` keys.

use std::collections::BTreeSet;

use proptest::prelude::*;
use recordindex::BTreeIndex;

fn build(t: usize, keys: &[i32]) -> BTreeIndex<i32> {
    let mut tree = BTreeIndex::new(t).unwrap();
    for &k in keys {
        tree.insert(k);
    }
    tree
}

/// Depth of every leaf, found by walking the tree.
fn leaf_depths(tree: &BTreeIndex<i32>) -> Vec<usize> {
    fn walk(node: &recordindex::index::Node<i32>, depth: usize, out: &mut Vec<usize>) {
        if node.is_leaf() {
            out.push(depth);
        }
        for child in node.children() {
            walk(child, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(tree.root(), 0, &mut out);
    out
}

proptest! {
    #[test]
    fn prop_in_order_traversal_is_sorted_and_unique(
        t in 2usize..=6,
        keys in prop::collection::vec(-1000i32..1000, 0..400),
    ) {
        let tree = build(t, &keys);
        let expected: Vec<i32> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(tree.keys(), expected.clone());
        prop_assert_eq!(tree.len(), expected.len());
    }

    #[test]
    fn prop_structure_stays_valid(
        t in 2usize..=6,
        keys in prop::collection::vec(any::<i32>(), 0..400),
    ) {
        let mut tree = BTreeIndex::new(t).unwrap();
        for &k in &keys {
            tree.insert(k);
            prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
        }
    }

    #[test]
    fn prop_all_leaves_at_same_depth(
        t in 2usize..=5,
        keys in prop::collection::vec(any::<i32>(), 1..300),
    ) {
        let tree = build(t, &keys);
        let depths = leaf_depths(&tree);

        prop_assert!(depths.iter().all(|&d| d == tree.height() - 1));
    }

    #[test]
    fn prop_non_root_capacity(
        t in 2usize..=6,
        keys in prop::collection::vec(any::<i32>(), 0..300),
    ) {
        let tree = build(t, &keys);
        for (depth, level) in tree.levels().iter().enumerate() {
            for node in level {
                prop_assert!(node.len() <= 2 * t - 1);
                if depth > 0 {
                    prop_assert!(node.len() >= t - 1);
                }
            }
        }
    }

    #[test]
    fn prop_inserted_keys_remain_searchable(
        t in 2usize..=6,
        keys in prop::collection::vec(-500i32..500, 1..300),
    ) {
        let mut tree = BTreeIndex::new(t).unwrap();
        for (i, &k) in keys.iter().enumerate() {
            tree.insert(k);
            prop_assert!(tree.search(k));
            // Earlier keys survive later splits
            for &earlier in &keys[..i] {
                prop_assert!(tree.search(earlier));
            }
        }
    }

    #[test]
    fn prop_absent_keys_not_found(
        t in 2usize..=6,
        keys in prop::collection::vec(0i32..1000, 0..300),
        probes in prop::collection::vec(-1000i32..2000, 0..100),
    ) {
        let tree = build(t, &keys);
        let present: BTreeSet<i32> = keys.iter().copied().collect();

        for probe in probes {
            prop_assert_eq!(tree.search(probe), present.contains(&probe));
        }
    }

    #[test]
    fn prop_duplicate_insert_is_noop(
        t in 2usize..=6,
        keys in prop::collection::vec(any::<i32>(), 1..200),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = build(t, &keys);
        let before = tree.levels();
        let len = tree.len();

        prop_assert!(!tree.insert(*pick.get(&keys)));
        prop_assert_eq!(tree.levels(), before);
        prop_assert_eq!(tree.len(), len);
    }
}
