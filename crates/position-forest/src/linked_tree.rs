//! Binary tree over explicit parent/left/right links.
//!
//! Nodes live in an append-only arena; links are `Option<u32>` indices into
//! it, as in [`crate::util`]. Removal vacates a node's slot by taking its
//! element out, so stale positions fail validation instead of resolving to a
//! recycled node. The arena representation makes `attach` an O(donor) move of
//! two whole subtrees with no shared aliasing left behind.

use crate::error::TreeError;
use crate::types::{next_tree_tag, BinaryTree, Node};
use crate::util::{preorder, sibling_of};

/// Opaque position handle into a [`LinkedBinaryTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkedPos {
    tree: u64,
    index: u32,
}

/// Arena node. The element is an `Option` so removal can take it by value
/// without shifting the arena.
struct LinkedNode<E> {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    elem: Option<E>,
}

impl<E> LinkedNode<E> {
    fn new(e: E, p: Option<u32>) -> Self {
        Self {
            p,
            l: None,
            r: None,
            elem: Some(e),
        }
    }
}

impl<E> Node for LinkedNode<E> {
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

/// Explicit-link binary tree.
pub struct LinkedBinaryTree<E> {
    arena: Vec<LinkedNode<E>>,
    root: Option<u32>,
    size: usize,
    tag: u64,
}

impl<E> LinkedBinaryTree<E> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            size: 0,
            tag: next_tree_tag(),
        }
    }

    fn pos(&self, index: u32) -> LinkedPos {
        LinkedPos {
            tree: self.tag,
            index,
        }
    }

    /// Validates a handle and resolves it to a live arena index.
    fn check(&self, v: LinkedPos) -> Result<u32, TreeError> {
        if v.tree != self.tag {
            return Err(TreeError::InvalidPosition(
                "position belongs to a different tree",
            ));
        }
        let i = v.index as usize;
        if i >= self.arena.len() || self.arena[i].elem.is_none() {
            return Err(TreeError::InvalidPosition(
                "position does not name a live node",
            ));
        }
        Ok(v.index)
    }

    fn node(&self, i: u32) -> &LinkedNode<E> {
        &self.arena[i as usize]
    }

    fn node_mut(&mut self, i: u32) -> &mut LinkedNode<E> {
        &mut self.arena[i as usize]
    }

    fn push_node(&mut self, e: E, parent: Option<u32>) -> u32 {
        self.arena.push(LinkedNode::new(e, parent));
        (self.arena.len() - 1) as u32
    }

    /// Removes the node at `v`. Only nodes with at most one child may be
    /// removed; the sole child (if any) takes the removed node's place.
    pub fn remove(&mut self, v: LinkedPos) -> Result<E, TreeError> {
        let i = self.check(v)?;
        let (p, l, r) = {
            let n = self.node(i);
            (n.p, n.l, n.r)
        };
        if l.is_some() && r.is_some() {
            return Err(TreeError::InvalidPosition(
                "cannot remove a node with two children",
            ));
        }
        let child = l.or(r);
        match p {
            None => {
                if let Some(c) = child {
                    self.node_mut(c).set_p(None);
                }
                self.root = child;
            }
            Some(p) => {
                if self.node(p).l() == Some(i) {
                    self.node_mut(p).set_l(child);
                } else {
                    self.node_mut(p).set_r(child);
                }
                if let Some(c) = child {
                    self.node_mut(c).set_p(Some(p));
                }
            }
        }
        self.size -= 1;
        let n = self.node_mut(i);
        n.set_p(None);
        n.set_l(None);
        n.set_r(None);
        Ok(n.elem.take().expect("checked node holds an element"))
    }

    /// Grafts `left_donor` as the left subtree and `right_donor` as the right
    /// subtree of the external node `v`. Both donors are consumed; their
    /// nodes move into this tree's arena and this tree's size grows by the
    /// sum of the donor sizes. Positions minted by the donors are no longer
    /// honored anywhere.
    pub fn attach(
        &mut self,
        v: LinkedPos,
        left_donor: LinkedBinaryTree<E>,
        right_donor: LinkedBinaryTree<E>,
    ) -> Result<(), TreeError> {
        let i = self.check(v)?;
        if self.node(i).l().is_some() || self.node(i).r().is_some() {
            return Err(TreeError::InvalidPosition(
                "cannot attach at an internal node",
            ));
        }
        if let Some(r1) = self.absorb(left_donor) {
            self.node_mut(i).set_l(Some(r1));
            self.node_mut(r1).set_p(Some(i));
        }
        if let Some(r2) = self.absorb(right_donor) {
            self.node_mut(i).set_r(Some(r2));
            self.node_mut(r2).set_p(Some(i));
        }
        Ok(())
    }

    /// Moves a donor's arena into this one, offsetting every link, and
    /// returns the donor root's new index.
    fn absorb(&mut self, donor: LinkedBinaryTree<E>) -> Option<u32> {
        let root = donor.root?;
        let base = self.arena.len() as u32;
        for mut node in donor.arena {
            node.p = node.p.map(|x| x + base);
            node.l = node.l.map(|x| x + base);
            node.r = node.r.map(|x| x + base);
            self.arena.push(node);
        }
        self.size += donor.size;
        Some(root + base)
    }

    /// The other child of `v`'s parent.
    pub fn sibling(&self, v: LinkedPos) -> Result<LinkedPos, TreeError> {
        let i = self.check(v)?;
        match sibling_of(&self.arena, i) {
            Some(s) => Ok(self.pos(s)),
            None => Err(TreeError::BoundaryViolation("no sibling")),
        }
    }
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinaryTree<E> for LinkedBinaryTree<E> {
    type Pos = LinkedPos;

    fn size(&self) -> usize {
        self.size
    }

    fn root(&self) -> Result<LinkedPos, TreeError> {
        match self.root {
            Some(r) => Ok(self.pos(r)),
            None => Err(TreeError::EmptyTree),
        }
    }

    fn parent(&self, v: LinkedPos) -> Result<LinkedPos, TreeError> {
        let i = self.check(v)?;
        match self.node(i).p() {
            Some(p) => Ok(self.pos(p)),
            None => Err(TreeError::BoundaryViolation("no parent")),
        }
    }

    fn left(&self, v: LinkedPos) -> Result<LinkedPos, TreeError> {
        let i = self.check(v)?;
        match self.node(i).l() {
            Some(l) => Ok(self.pos(l)),
            None => Err(TreeError::BoundaryViolation("no left child")),
        }
    }

    fn right(&self, v: LinkedPos) -> Result<LinkedPos, TreeError> {
        let i = self.check(v)?;
        match self.node(i).r() {
            Some(r) => Ok(self.pos(r)),
            None => Err(TreeError::BoundaryViolation("no right child")),
        }
    }

    fn has_left(&self, v: LinkedPos) -> Result<bool, TreeError> {
        let i = self.check(v)?;
        Ok(self.node(i).l().is_some())
    }

    fn has_right(&self, v: LinkedPos) -> Result<bool, TreeError> {
        let i = self.check(v)?;
        Ok(self.node(i).r().is_some())
    }

    fn is_root(&self, v: LinkedPos) -> Result<bool, TreeError> {
        let i = self.check(v)?;
        Ok(self.root == Some(i))
    }

    fn element(&self, v: LinkedPos) -> Result<&E, TreeError> {
        let i = self.check(v)?;
        self.node(i)
            .elem
            .as_ref()
            .ok_or(TreeError::InvalidPosition("node vacated"))
    }

    fn replace(&mut self, v: LinkedPos, e: E) -> Result<E, TreeError> {
        let i = self.check(v)?;
        let slot = self
            .node_mut(i)
            .elem
            .as_mut()
            .ok_or(TreeError::InvalidPosition("node vacated"))?;
        Ok(std::mem::replace(slot, e))
    }

    fn add_root(&mut self, e: E) -> Result<LinkedPos, TreeError> {
        if !self.is_empty() {
            return Err(TreeError::NonEmptyTree);
        }
        let i = self.push_node(e, None);
        self.root = Some(i);
        self.size = 1;
        Ok(self.pos(i))
    }

    fn insert_left(&mut self, v: LinkedPos, e: E) -> Result<LinkedPos, TreeError> {
        let i = self.check(v)?;
        if self.node(i).l().is_some() {
            return Err(TreeError::InvalidPosition("node already has a left child"));
        }
        let w = self.push_node(e, Some(i));
        self.node_mut(i).set_l(Some(w));
        self.size += 1;
        Ok(self.pos(w))
    }

    fn insert_right(&mut self, v: LinkedPos, e: E) -> Result<LinkedPos, TreeError> {
        let i = self.check(v)?;
        if self.node(i).r().is_some() {
            return Err(TreeError::InvalidPosition("node already has a right child"));
        }
        let w = self.push_node(e, Some(i));
        self.node_mut(i).set_r(Some(w));
        self.size += 1;
        Ok(self.pos(w))
    }

    /// All live positions in preorder, by explicit recursive descent.
    fn positions(&self) -> Vec<LinkedPos> {
        preorder(&self.arena, self.root)
            .into_iter()
            .map(|i| self.pos(i))
            .collect()
    }
}
