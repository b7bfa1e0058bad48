//! Position-addressed binary tree ADTs and a heap priority queue.
//!
//! Three independent structures share one addressing vocabulary:
//!
//! - [`ArrayBinaryTree`] — tree shape encoded purely by integer indices into
//!   a growable array (root at 1, children of `i` at `2i` / `2i + 1`).
//! - [`LinkedBinaryTree`] — explicit parent/left/right links in an arena,
//!   with O(1) subtree `attach` and single-child `remove`.
//! - [`HeapPriorityQueue`] — binary min-heap over the same implicit-index
//!   scheme, with logarithmic `insert` / `remove_min`.
//!
//! Both trees implement the [`BinaryTree`] trait but mint their own opaque
//! position types; a position is only honored by the instance that issued it.
//! All failures are typed ([`TreeError`], [`HeapError`]) and every operation
//! validates its preconditions before mutating, so a failed call leaves the
//! structure unchanged.
//!
//! Everything here is single-threaded and in-memory; instances are exclusively
//! owned and provide no internal synchronization.

pub mod array_tree;
pub mod error;
pub mod heap;
pub mod linked_tree;
pub mod types;
pub mod util;

pub use array_tree::{ArrayBinaryTree, ArrayPos, DEFAULT_CAPACITY};
pub use error::{HeapError, TreeError};
pub use heap::{Entry, HeapPriorityQueue};
pub use linked_tree::{LinkedBinaryTree, LinkedPos};
pub use types::{BinaryTree, Comparator, Node};
