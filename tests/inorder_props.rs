use inorder_walk::*;
use proptest::prelude::*;

/// Random shape: each key becomes a node, shape decided by insertion order
fn arbitrary_tree(keys: &[i16]) -> SearchTree<i16> {
    keys.iter().copied().collect()
}

proptest! {
    #[test]
    fn search_tree_enumerates_sorted_multiset(
        keys in proptest::collection::vec(any::<i16>(), 0..200),
    ) {
        let tree = arbitrary_tree(&keys);
        let produced: Vec<i16> = tree.iter().copied().collect();

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(produced, sorted);
    }

    #[test]
    fn balanced_preserves_slice_order(
        keys in proptest::collection::vec(any::<u8>(), 1..300),
    ) {
        let root = balanced(&keys).expect("non-empty");
        let produced: Vec<u8> = root.iter().copied().collect();
        prop_assert_eq!(produced, keys);
    }

    #[test]
    fn frames_bounded_by_height(
        keys in proptest::collection::vec(any::<i16>(), 1..200),
    ) {
        let tree = arbitrary_tree(&keys);
        let height = tree.height();
        let mut cursor = tree.iter();
        while cursor.next().is_some() {
            prop_assert!(cursor.depth() < height);
        }
        prop_assert!(cursor.profile().satisfies_bound(height));
        prop_assert_eq!(cursor.nodes_visited(), keys.len());
    }

    #[test]
    fn resume_yields_suffix(
        keys in proptest::collection::vec(any::<i16>(), 1..120),
        split in any::<prop::sample::Index>(),
    ) {
        let tree = arbitrary_tree(&keys);
        let full: Vec<i16> = tree.iter().copied().collect();
        let k = split.index(full.len() + 1);

        let mut cursor = tree.iter();
        cursor.by_ref().take(k).for_each(|_| ());
        let resumed = cursor.checkpoint().resume(tree.root()).expect("same root");
        let rest: Vec<i16> = resumed.copied().collect();
        prop_assert_eq!(&rest[..], &full[k..]);
    }
}
