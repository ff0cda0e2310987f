//! Errors reported by [`crate::BiTree`].

use crate::trees::Side;
use std::convert::Infallible;
use thiserror::Error;

/// Message used when an internal invariant of the tree has been broken.
/// Reaching it is a bug in this crate, never a caller error.
pub(crate) const INVARIANT_VIOLATED: &str =
    "invariant violated: level-order position missing from a non-empty tree";

/// Every way a [`crate::BiTree`] operation can be refused.
///
/// None of the operations mutate the tree before returning one of these,
/// so the tree is unchanged after an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiTreeError {
    #[error("the {traversal} traversal is missing")]
    NullInput { traversal: &'static str },
    #[error("the value to insert is missing")]
    NullValue,
    #[error("the {traversal} traversal doesn't have any data")]
    EmptyInput { traversal: &'static str },
    #[error("the traversal lengths are inconsistent: preorder has {preorder}, inorder has {inorder}")]
    LengthMismatch { preorder: usize, inorder: usize },
    #[error("index {index} is out of range for a tree of {count} nodes")]
    IndexOutOfRange { index: isize, count: usize },
    #[error("the tree is empty")]
    EmptyTree,
    #[error("the node at index {index} already has a {side} child")]
    OccupiedSlot { index: usize, side: Side },
    #[error("invalid side tag: {0:?}")]
    InvalidSide(String),
    #[error("the root node can't be removed")]
    RootRemoval,
}

/// Lets infallible conversions, such as a [`Side`] into itself, stand wherever
/// a fallible side tag is accepted.
impl From<Infallible> for BiTreeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
