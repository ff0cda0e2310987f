//! The basic tree module
//! This module implements the owned, unbalanced binary tree that [`crate::BiTree`]
//! is built on.
//!
//! A [`BasicTree`] is either empty or owns a boxed [`BasicNode`], which in turn
//! owns its two subtrees. Ownership only ever points downwards: a node never
//! stores a reference to its parent. Moving upwards is done with a
//! [`BasicWalker`], which remembers the path it took from the root.

mod implementations;
mod iterative_deallocator;
pub mod iterators;
mod level_order;
mod reconstruct;
mod walker;

pub use iterative_deallocator::deallocate_iteratively;
pub use level_order::locate;
pub use walker::*;

use super::Side;

/// A basic tree. might be empty.
/// Its `Debug` output is the list of values in level order.
pub enum BasicTree<T> {
    Empty,
    Root(Box<BasicNode<T>>),
}
pub use BasicTree::*;

impl<T> BasicTree<T> {
    pub fn new() -> Self {
        Empty
    }

    pub fn from_node(node: BasicNode<T>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&BasicNode<T>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn node_mut(&mut self) -> Option<&mut BasicNode<T>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn into_node(self) -> Option<BasicNode<T>> {
        self.into_node_boxed().map(|node| *node)
    }

    pub fn into_node_boxed(self) -> Option<Box<BasicNode<T>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Returns a walker positioned at the root of this tree.
    pub fn walker(&mut self) -> BasicWalker<'_, T> {
        BasicWalker::new(self)
    }
}

/// A basic node. can be viewed as a non-empty basic tree: it always has a value.
#[derive(Debug)]
pub struct BasicNode<T> {
    pub(crate) value: T,
    pub left: BasicTree<T>,
    pub right: BasicTree<T>,
}

impl<T> BasicNode<T> {
    pub fn new(value: T) -> BasicNode<T> {
        BasicNode {
            value,
            left: Empty,
            right: Empty,
        }
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// A node with neither child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn child(&self, side: Side) -> &BasicTree<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut BasicTree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
