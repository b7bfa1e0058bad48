use proptest::prelude::*;

use position_forest::{ArrayBinaryTree, BinaryTree, HeapPriorityQueue};

proptest! {
    /// Draining a heap always yields keys in non-decreasing order, whatever
    /// the insertion order was.
    #[test]
    fn drain_is_sorted(keys in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut q = HeapPriorityQueue::new();
        for &k in &keys {
            q.insert(k, ()).unwrap();
        }
        prop_assert_eq!(q.size(), keys.len());

        let mut drained = Vec::with_capacity(keys.len());
        while let Ok(entry) = q.remove_min() {
            drained.push(entry.into_pair().0);
        }
        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    /// Interleaved inserts and removals keep the minimum consistent with a
    /// sorted reference multiset.
    #[test]
    fn min_matches_reference(ops in proptest::collection::vec((any::<bool>(), any::<i16>()), 1..200)) {
        let mut q = HeapPriorityQueue::new();
        let mut reference: Vec<i16> = Vec::new();

        for (remove, key) in ops {
            if remove && !reference.is_empty() {
                let got = q.remove_min().unwrap().into_pair().0;
                reference.sort_unstable();
                prop_assert_eq!(got, reference.remove(0));
            } else {
                q.insert(key, ()).unwrap();
                reference.push(key);
            }
            prop_assert_eq!(q.size(), reference.len());
            if let Some(&min) = reference.iter().min() {
                prop_assert_eq!(*q.min().unwrap().key(), min);
            }
        }
    }

    /// Random insert sequences never orphan an array-tree node: every
    /// non-root position has a resolvable parent, and every child link agrees
    /// with its parent's occupancy.
    #[test]
    fn array_tree_has_no_orphans(steps in proptest::collection::vec((any::<u8>(), any::<bool>()), 0..100)) {
        let mut t = ArrayBinaryTree::new();
        let root = t.add_root(0u8).unwrap();
        let mut known = vec![root];

        for (pick, go_left) in steps {
            let at = known[pick as usize % known.len()];
            let inserted = if go_left {
                t.insert_left(at, pick)
            } else {
                t.insert_right(at, pick)
            };
            if let Ok(p) = inserted {
                known.push(p);
            }
        }

        prop_assert_eq!(t.positions().len(), t.size());
        for p in t.positions() {
            if !t.is_root(p).unwrap() {
                let parent = t.parent(p).unwrap();
                let children = t.children(parent).unwrap();
                prop_assert!(children.contains(&p));
            }
        }
    }
}
