//! Free helpers over link arenas (`&[N]` where `N: Node`).
//!
//! All functions take the arena slice plus `u32` node indices, never the
//! owning tree, so they stay usable from any arena-backed structure.

use crate::types::Node;

#[inline]
fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

fn preorder_inner<N: Node>(arena: &[N], node: u32, out: &mut Vec<u32>) {
    out.push(node);
    if let Some(l) = get_l(arena, node) {
        preorder_inner(arena, l, out);
    }
    if let Some(r) = get_r(arena, node) {
        preorder_inner(arena, r, out);
    }
}

/// Indices of the subtree under `root` in preorder, materialized eagerly.
pub fn preorder<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    if let Some(r) = root {
        preorder_inner(arena, r, &mut out);
    }
    out
}

/// The other child of `node`'s parent, if both exist.
pub fn sibling_of<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    let p = get_p(arena, node)?;
    if get_l(arena, p) == Some(node) {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

fn subtree_size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| subtree_size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| subtree_size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn subtree_size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| subtree_size_inner(arena, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for Bare {
        fn p(&self) -> Option<u32> {
            self.p
        }
        fn l(&self) -> Option<u32> {
            self.l
        }
        fn r(&self) -> Option<u32> {
            self.r
        }
        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }
        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }
        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }
    }

    fn bare(p: Option<u32>, l: Option<u32>, r: Option<u32>) -> Bare {
        Bare { p, l, r }
    }

    //        0
    //       / \
    //      1   2
    //     /
    //    3
    fn sample() -> Vec<Bare> {
        vec![
            bare(None, Some(1), Some(2)),
            bare(Some(0), Some(3), None),
            bare(Some(0), None, None),
            bare(Some(1), None, None),
        ]
    }

    #[test]
    fn preorder_visits_node_left_right() {
        let arena = sample();
        assert_eq!(preorder(&arena, Some(0)), vec![0, 1, 3, 2]);
        assert_eq!(preorder(&arena, Some(1)), vec![1, 3]);
        assert_eq!(preorder::<Bare>(&arena, None), Vec::<u32>::new());
    }

    #[test]
    fn sibling_lookup() {
        let arena = sample();
        assert_eq!(sibling_of(&arena, 1), Some(2));
        assert_eq!(sibling_of(&arena, 2), Some(1));
        assert_eq!(sibling_of(&arena, 3), None);
        assert_eq!(sibling_of(&arena, 0), None);
    }

    #[test]
    fn subtree_sizes() {
        let arena = sample();
        assert_eq!(subtree_size(&arena, Some(0)), 4);
        assert_eq!(subtree_size(&arena, Some(1)), 2);
        assert_eq!(subtree_size::<Bare>(&arena, None), 0);
    }
}
