//! A generic binary tree that is rebuilt from a pair of traversals and then
//! edited by level-order position.
//!
//! * [`BiTree::from_traversals`] rebuilds the unique tree matching a preorder
//!   and an inorder traversal.
//! * [`BiTree::add`] and [`BiTree::remove`] insert and delete nodes addressed by
//!   their index in level order.
//! * The four traversal orders (level, pre, in, post) are available as iterators.
//!
//! The node graph itself lives in [`basic_tree`], an owned tree that is walked
//! up and down with a [`basic_tree::BasicWalker`].

#[macro_use]
extern crate derive_destructure;

pub mod error;
pub mod trees;

pub use error::BiTreeError;
pub use trees::bitree::BiTree;
pub use trees::{basic_tree, Side};
