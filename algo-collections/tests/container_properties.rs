//! Property-based tests for the primitive containers
//!
//! Each property states the invariant a container must keep under arbitrary
//! sequences of operations.

use std::collections::BTreeSet;

use algo_collections::{BinarySearchTree, DisjointSet, MaxHeap, MinHeap, Trie};
use proptest::prelude::*;

/// **Property 1: Heap drain order**
///
/// *For any* sequence of inserts, popping the root repeatedly yields the
/// elements in descending order for a max-heap and ascending for a min-heap.
mod property_1_heap_drain_order {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn max_heap_drains_descending(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut heap = MaxHeap::new();
            for v in &values {
                heap.push(*v);
            }
            let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();

            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(drained, expected);
        }

        #[test]
        fn min_heap_from_vec_drains_ascending(values in prop::collection::vec(any::<i16>(), 0..200)) {
            let mut heap = MinHeap::from_vec(values.clone());
            let drained: Vec<i16> = std::iter::from_fn(|| heap.pop()).collect();

            let mut expected = values;
            expected.sort_unstable();
            prop_assert_eq!(drained, expected);
        }
    }
}

/// **Property 2: BST ordering and deletion**
///
/// *For any* BST built by sequential inserts, in-order traversal is strictly
/// increasing; after deleting a key, searching for it fails and every other
/// key is still present.
mod property_2_bst {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn in_order_is_sorted_and_deduplicated(keys in prop::collection::vec(-500i32..500, 0..150)) {
            let tree: BinarySearchTree<i32> = keys.iter().copied().collect();
            let in_order: Vec<i32> = tree.iter().copied().collect();
            let expected: Vec<i32> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
            prop_assert_eq!(tree.len(), expected.len());
            prop_assert_eq!(in_order, expected);
        }

        #[test]
        fn delete_keeps_others(
            keys in prop::collection::vec(-100i32..100, 1..100),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut tree: BinarySearchTree<i32> = keys.iter().copied().collect();
            let victim = keys[pick.index(keys.len())];

            prop_assert!(tree.remove(&victim));
            prop_assert!(!tree.contains(&victim));
            for k in keys.iter().filter(|k| **k != victim) {
                prop_assert!(tree.contains(k), "lost key {}", k);
            }
            let in_order: Vec<i32> = tree.iter().copied().collect();
            prop_assert!(in_order.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

/// **Property 3: Trie agrees with a set**
///
/// *For any* sequence of inserts and removals, membership and prefix
/// enumeration match a `BTreeSet<String>` model.
mod property_3_trie_model {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn trie_matches_set(
            inserts in prop::collection::vec("[ab]{0,4}", 0..30),
            removals in prop::collection::vec("[ab]{0,4}", 0..10),
            prefix in "[ab]{0,2}",
        ) {
            let mut trie = Trie::new();
            let mut model = BTreeSet::new();
            for w in &inserts {
                prop_assert_eq!(trie.insert(w), model.insert(w.clone()));
            }
            for w in &removals {
                prop_assert_eq!(trie.remove(w), model.remove(w));
            }

            prop_assert_eq!(trie.len(), model.len());
            let expected: Vec<String> = model.iter().filter(|w| w.starts_with(&prefix)).cloned().collect();
            prop_assert_eq!(trie.words_with_prefix(&prefix), expected);
        }
    }
}

/// **Property 4: Union-find agrees with naive component labels**
mod property_4_disjoint_set {
    use super::*;

    proptest! {
        #[test]
        fn union_find_matches_relabelling(
            unions in prop::collection::vec((0usize..20, 0usize..20), 0..40),
        ) {
            let mut sets = DisjointSet::new(20);
            let mut label: Vec<usize> = (0..20).collect();
            for (a, b) in unions {
                let (la, lb) = (label[a], label[b]);
                prop_assert_eq!(sets.union(a, b), la != lb);
                for l in label.iter_mut() {
                    if *l == lb {
                        *l = la;
                    }
                }
            }
            for a in 0..20 {
                for b in 0..20 {
                    prop_assert_eq!(sets.connected(a, b), label[a] == label[b]);
                }
            }
            let distinct: BTreeSet<usize> = label.iter().copied().collect();
            prop_assert_eq!(sets.set_count(), distinct.len());
        }
    }
}
