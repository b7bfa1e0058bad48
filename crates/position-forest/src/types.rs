//! Trait definitions shared by the tree implementations.
//!
//! Each tree implementation mints its own opaque position type; the two node
//! layouts (implicit-index and linked-arena) are deliberately not unified.
//! A position carries the tag of the tree instance that issued it, and every
//! operation rejects positions minted by any other instance.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TreeError;

/// Comparator used by the heap priority queue.
///
/// Returns `Some(negative)` / `Some(0)` / `Some(positive)` for less / equal /
/// greater, and `None` when the two keys are not comparable under the order.
pub type Comparator<K> = dyn Fn(&K, &K) -> Option<i32>;

/// Link accessors for arena-backed linked nodes (`p` / `l` / `r`).
///
/// All link "pointers" are `Option<u32>` indices into a caller-owned
/// `Vec<N>` arena; the generic helpers in [`crate::util`] work through this
/// trait.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

static NEXT_TREE_TAG: AtomicU64 = AtomicU64::new(1);

/// Mints a process-unique tag for a new tree instance.
pub(crate) fn next_tree_tag() -> u64 {
    NEXT_TREE_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Shared contract of the two binary tree implementations.
///
/// `Pos` is the implementation's opaque position handle. Handles stay cheap
/// (`Copy`) and stay valid until the node they name is removed or its tree is
/// consumed by an attach.
pub trait BinaryTree<E> {
    type Pos: Copy + Eq + fmt::Debug;

    /// Number of nodes in the tree.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Root position, or [`TreeError::EmptyTree`].
    fn root(&self) -> Result<Self::Pos, TreeError>;

    /// Parent of `v`, or [`TreeError::BoundaryViolation`] on the root.
    fn parent(&self, v: Self::Pos) -> Result<Self::Pos, TreeError>;

    /// Left child of `v`, or [`TreeError::BoundaryViolation`] if absent.
    fn left(&self, v: Self::Pos) -> Result<Self::Pos, TreeError>;

    /// Right child of `v`, or [`TreeError::BoundaryViolation`] if absent.
    fn right(&self, v: Self::Pos) -> Result<Self::Pos, TreeError>;

    fn has_left(&self, v: Self::Pos) -> Result<bool, TreeError>;

    fn has_right(&self, v: Self::Pos) -> Result<bool, TreeError>;

    fn is_root(&self, v: Self::Pos) -> Result<bool, TreeError>;

    /// A node is internal iff it has at least one child.
    fn is_internal(&self, v: Self::Pos) -> Result<bool, TreeError> {
        Ok(self.has_left(v)? || self.has_right(v)?)
    }

    fn is_external(&self, v: Self::Pos) -> Result<bool, TreeError> {
        Ok(!self.is_internal(v)?)
    }

    /// Element stored at `v`.
    fn element(&self, v: Self::Pos) -> Result<&E, TreeError>;

    /// Overwrites the element at `v`, returning the previous one. The
    /// structural position is unchanged.
    fn replace(&mut self, v: Self::Pos, e: E) -> Result<E, TreeError>;

    /// Places `e` at the root of an empty tree, or fails with
    /// [`TreeError::NonEmptyTree`].
    fn add_root(&mut self, e: E) -> Result<Self::Pos, TreeError>;

    /// Inserts `e` as the left child of `v`; the slot must be vacant.
    fn insert_left(&mut self, v: Self::Pos, e: E) -> Result<Self::Pos, TreeError>;

    /// Inserts `e` as the right child of `v`; the slot must be vacant.
    fn insert_right(&mut self, v: Self::Pos, e: E) -> Result<Self::Pos, TreeError>;

    /// Present children of `v`, left before right.
    fn children(&self, v: Self::Pos) -> Result<Vec<Self::Pos>, TreeError> {
        let mut out = Vec::with_capacity(2);
        if self.has_left(v)? {
            out.push(self.left(v)?);
        }
        if self.has_right(v)? {
            out.push(self.right(v)?);
        }
        Ok(out)
    }

    /// All occupied positions; ordering is implementation-defined.
    fn positions(&self) -> Vec<Self::Pos>;

    /// All elements in preorder (node, left subtree, right subtree).
    fn elements(&self) -> Vec<&E> {
        fn walk<'t, E, T>(tree: &'t T, v: T::Pos, out: &mut Vec<&'t E>)
        where
            T: BinaryTree<E> + ?Sized,
        {
            if let Ok(e) = tree.element(v) {
                out.push(e);
            }
            if let Ok(true) = tree.has_left(v) {
                if let Ok(l) = tree.left(v) {
                    walk(tree, l, out);
                }
            }
            if let Ok(true) = tree.has_right(v) {
                if let Ok(r) = tree.right(v) {
                    walk(tree, r, out);
                }
            }
        }

        let mut out = Vec::with_capacity(self.size());
        if let Ok(root) = self.root() {
            walk(self, root, &mut out);
        }
        out
    }
}
