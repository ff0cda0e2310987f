//! Queries and trait implementations for [`BasicTree`].
//! It is mostly a separate file from the main module file, since it's a private module, and its
//! contents are re-exported.

use super::iterators::*;
use super::*;
use std::fmt;

impl<T> Default for BasicTree<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> BasicTree<T> {
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self)
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self)
    }

    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self)
    }

    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self)
    }

    /// The number of nodes reachable from the root.
    pub fn size(&self) -> usize {
        self.level_order().count()
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.level_order().filter(|node| node.is_leaf()).count()
    }

    /// The number of nodes on the longest path from the root down to a leaf.
    /// The empty tree has depth `0`.
    ///
    /// Computed one level at a time, so it doesn't recurse.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level: Vec<&BasicNode<T>> = self.node().into_iter().collect();
        while !level.is_empty() {
            depth += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.node().into_iter().chain(node.right.node()))
                .collect();
        }
        depth
    }
}

impl<T: PartialEq> BasicTree<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.level_order().any(|node| node.value() == value)
    }
}

/// Walks the tree in level order rather than recursing into the subtrees.
impl<T: fmt::Debug> fmt::Debug for BasicTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.level_order().map(BasicNode::value))
            .finish()
    }
}

impl<T> IntoIterator for BasicTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in level order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
