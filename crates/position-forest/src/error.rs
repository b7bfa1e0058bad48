//! Error types for the tree and heap structures.

use thiserror::Error;

/// Failures surfaced by both binary tree implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The position is foreign to this tree, points at a vacated slot, or is
    /// structurally unusable for the requested operation.
    #[error("position is invalid: {0}")]
    InvalidPosition(&'static str),

    /// The position is valid but lacks the requested relative.
    #[error("boundary violation: {0}")]
    BoundaryViolation(&'static str),

    #[error("tree is empty")]
    EmptyTree,

    #[error("tree already has a root")]
    NonEmptyTree,
}

/// Failures surfaced by the heap priority queue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The key is not comparable with itself under the active comparator.
    #[error("invalid key")]
    InvalidKey,
}
