//! Binary tree over a growable array, with implicit index addressing.
//!
//! The root lives at index 1; a node at index `i` keeps its left child at
//! `2i` and its right child at `2i + 1`. Index 0 is a permanent sentinel and
//! never holds an element. No per-node links are stored: navigation is pure
//! index arithmetic over the backing vec.

use std::fmt;

use crate::error::TreeError;
use crate::types::{next_tree_tag, BinaryTree};

/// Initial backing capacity of [`ArrayBinaryTree::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Opaque position handle into an [`ArrayBinaryTree`].
///
/// Carries the issuing tree's tag; every operation rejects handles minted by
/// another instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayPos {
    tree: u64,
    index: u32,
}

/// Implicit-index binary tree.
pub struct ArrayBinaryTree<E> {
    // len() is the capacity; slot 0 stays None.
    slots: Vec<Option<E>>,
    size: usize,
    max_index: usize,
    tag: u64,
}

impl<E> ArrayBinaryTree<E> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty tree with the given initial capacity (at least 2, so
    /// the root slot exists and doubling can grow).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            size: 0,
            max_index: 0,
            tag: next_tree_tag(),
        }
    }

    /// Current backing capacity, in slots (sentinel included).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn pos(&self, index: usize) -> ArrayPos {
        ArrayPos {
            tree: self.tag,
            index: index as u32,
        }
    }

    /// Validates a handle and resolves it to an occupied index.
    fn check(&self, v: ArrayPos) -> Result<usize, TreeError> {
        if v.tree != self.tag {
            return Err(TreeError::InvalidPosition(
                "position belongs to a different tree",
            ));
        }
        let i = v.index as usize;
        if i == 0 || i > self.max_index || self.slots[i].is_none() {
            return Err(TreeError::InvalidPosition(
                "position does not name an occupied slot",
            ));
        }
        Ok(i)
    }

    /// Doubles capacity until index `i` is addressable. Occupied slots keep
    /// their indices; new slots are vacant.
    fn grow_for(&mut self, i: usize) {
        let mut capacity = self.slots.len();
        if i < capacity {
            return;
        }
        while i >= capacity {
            capacity *= 2;
        }
        self.slots.resize_with(capacity, || None);
    }

    fn occupied(&self, i: usize) -> bool {
        i <= self.max_index && self.slots[i].is_some()
    }

    fn note_index(&mut self, i: usize) {
        if i > self.max_index {
            self.max_index = i;
        }
    }

    fn insert_at(&mut self, child: usize, e: E) -> ArrayPos {
        self.grow_for(child);
        self.slots[child] = Some(e);
        self.size += 1;
        self.note_index(child);
        self.pos(child)
    }
}

impl<E> Default for ArrayBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinaryTree<E> for ArrayBinaryTree<E> {
    type Pos = ArrayPos;

    fn size(&self) -> usize {
        self.size
    }

    fn root(&self) -> Result<ArrayPos, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(self.pos(1))
    }

    fn parent(&self, v: ArrayPos) -> Result<ArrayPos, TreeError> {
        let i = self.check(v)?;
        if i == 1 {
            return Err(TreeError::BoundaryViolation("no parent"));
        }
        Ok(self.pos(i / 2))
    }

    fn left(&self, v: ArrayPos) -> Result<ArrayPos, TreeError> {
        let i = self.check(v)?;
        if !self.occupied(2 * i) {
            return Err(TreeError::BoundaryViolation("no left child"));
        }
        Ok(self.pos(2 * i))
    }

    fn right(&self, v: ArrayPos) -> Result<ArrayPos, TreeError> {
        let i = self.check(v)?;
        if !self.occupied(2 * i + 1) {
            return Err(TreeError::BoundaryViolation("no right child"));
        }
        Ok(self.pos(2 * i + 1))
    }

    fn has_left(&self, v: ArrayPos) -> Result<bool, TreeError> {
        let i = self.check(v)?;
        Ok(self.occupied(2 * i))
    }

    fn has_right(&self, v: ArrayPos) -> Result<bool, TreeError> {
        let i = self.check(v)?;
        Ok(self.occupied(2 * i + 1))
    }

    fn is_root(&self, v: ArrayPos) -> Result<bool, TreeError> {
        let i = self.check(v)?;
        Ok(i == 1)
    }

    fn element(&self, v: ArrayPos) -> Result<&E, TreeError> {
        let i = self.check(v)?;
        self.slots[i]
            .as_ref()
            .ok_or(TreeError::InvalidPosition("slot vacated"))
    }

    fn replace(&mut self, v: ArrayPos, e: E) -> Result<E, TreeError> {
        let i = self.check(v)?;
        let slot = self.slots[i]
            .as_mut()
            .ok_or(TreeError::InvalidPosition("slot vacated"))?;
        Ok(std::mem::replace(slot, e))
    }

    fn add_root(&mut self, e: E) -> Result<ArrayPos, TreeError> {
        if !self.is_empty() {
            return Err(TreeError::NonEmptyTree);
        }
        self.slots[1] = Some(e);
        self.size = 1;
        self.note_index(1);
        Ok(self.pos(1))
    }

    fn insert_left(&mut self, v: ArrayPos, e: E) -> Result<ArrayPos, TreeError> {
        let i = self.check(v)?;
        if self.occupied(2 * i) {
            return Err(TreeError::InvalidPosition("node already has a left child"));
        }
        Ok(self.insert_at(2 * i, e))
    }

    fn insert_right(&mut self, v: ArrayPos, e: E) -> Result<ArrayPos, TreeError> {
        let i = self.check(v)?;
        if self.occupied(2 * i + 1) {
            return Err(TreeError::InvalidPosition("node already has a right child"));
        }
        Ok(self.insert_at(2 * i + 1, e))
    }

    /// Occupied positions in ascending index order (breadth-left layout).
    fn positions(&self) -> Vec<ArrayPos> {
        (1..=self.max_index)
            .filter(|&i| self.slots[i].is_some())
            .map(|i| self.pos(i))
            .collect()
    }
}

impl<E: fmt::Display> fmt::Display for ArrayBinaryTree<E> {
    /// Renders the backing layout from the sentinel through `max_index`,
    /// vacant slots as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        write!(f, "[")?;
        for i in 0..=self.max_index {
            if i > 0 {
                write!(f, ", ")?;
            }
            match &self.slots[i] {
                Some(e) => write!(f, "({}, {})", e, i)?,
                None => write!(f, "null")?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_doubles_until_index_fits() {
        let mut t = ArrayBinaryTree::with_capacity(2);
        let mut v = t.add_root(0u32).unwrap();
        assert_eq!(t.capacity(), 2);
        // Chain of left children: indices 2, 4, 8, 16.
        for k in 1..=4 {
            v = t.insert_left(v, k).unwrap();
        }
        assert_eq!(t.capacity(), 32);
        assert_eq!(t.size(), 5);
        assert_eq!(t.elements(), vec![&0, &1, &2, &3, &4]);
    }

    #[test]
    fn foreign_and_stale_positions_are_rejected() {
        let mut a = ArrayBinaryTree::new();
        let mut b = ArrayBinaryTree::new();
        let ra = a.add_root("a").unwrap();
        let rb = b.add_root("b").unwrap();
        assert!(matches!(
            a.element(rb),
            Err(TreeError::InvalidPosition(_))
        ));
        assert!(matches!(
            b.insert_left(ra, "x"),
            Err(TreeError::InvalidPosition(_))
        ));
        assert_eq!(a.element(ra), Ok(&"a"));
    }

    #[test]
    fn display_renders_layout_with_sentinel() {
        let mut t = ArrayBinaryTree::new();
        assert_eq!(t.to_string(), "[]");
        let r = t.add_root("*").unwrap();
        t.insert_right(r, "+").unwrap();
        assert_eq!(t.to_string(), "[null, (*, 1), null, (+, 3)]");
    }

    #[test]
    fn failed_insert_leaves_tree_unchanged() {
        let mut t = ArrayBinaryTree::new();
        let r = t.add_root(1).unwrap();
        t.insert_left(r, 2).unwrap();
        let before = t.size();
        assert!(t.insert_left(r, 9).is_err());
        assert_eq!(t.size(), before);
        assert_eq!(t.element(t.left(r).unwrap()), Ok(&2));
    }
}
