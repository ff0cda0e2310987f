//! The index-addressed binary tree.
//!
//! A [`BiTree`] is built from a preorder and an inorder traversal, and then
//! edited by position: every index-taking operation counts nodes in level
//! order (breadth first, left to right), recomputed on each call. Indices are
//! therefore only stable between two calls if no node was added or removed in
//! between.
//!
//! This is not a search tree. Nothing is ordered by value and nothing is ever
//! rebalanced: where a node goes is decided by the caller.

use super::basic_tree::*;
use super::Side;
use crate::error::{BiTreeError, INVARIANT_VIOLATED};
use log::debug;
use std::convert::{TryFrom, TryInto};
use std::fmt;

/// A binary tree holding values of type `T`, owning all of its nodes.
///
/// Callers only ever see values. Nodes are created by [`BiTree::from_traversals`]
/// and [`BiTree::add`], and destroyed by [`BiTree::remove`] and [`BiTree::clear`].
///
/// ```
/// use bitree::{BiTree, Side};
///
/// let pre: Vec<char> = "ABDECFG".chars().collect();
/// let ino: Vec<char> = "DBEAFCG".chars().collect();
/// let mut tree = BiTree::from_traversals(&pre, &ino).unwrap();
/// assert_eq!(tree.level_order().unwrap().collect::<String>(), "ABCDEFG");
///
/// tree.add('H', 3, Side::Left).unwrap();
/// assert_eq!(tree.get_value_at(7), Ok(&'H'));
/// assert_eq!(tree.remove(1), Ok('B'));
/// assert_eq!(tree.count(), 7);
/// ```
#[derive(destructure)]
pub struct BiTree<T> {
    tree: BasicTree<T>,
    /// Always equal to the number of nodes reachable from the root.
    count: usize,
}

impl<T> BiTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        BiTree {
            tree: BasicTree::Empty,
            count: 0,
        }
    }

    /// The number of nodes in the tree.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Checks that `index` addresses an existing node, and converts it.
    fn position(&self, index: isize) -> Result<usize, BiTreeError> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.count)
            .ok_or(BiTreeError::IndexOutOfRange {
                index,
                count: self.count,
            })
    }

    fn path_to(&self, position: usize) -> Vec<Side> {
        locate(&self.tree, position).expect(INVARIANT_VIOLATED)
    }

    fn require_nodes(&self) -> Result<(), BiTreeError> {
        if self.is_empty() {
            Err(BiTreeError::EmptyTree)
        } else {
            Ok(())
        }
    }

    /// Returns the value of the node at `index` in level order.
    pub fn get_value_at(&self, index: isize) -> Result<&T, BiTreeError> {
        let position = self.position(index)?;
        let node = self
            .tree
            .level_order()
            .nth(position)
            .expect(INVARIANT_VIOLATED);
        Ok(node.value())
    }

    /// The value at the root, if there is one.
    pub fn root_value(&self) -> Option<&T> {
        Some(self.tree.node()?.value())
    }

    /// Node-level access for tests and debugging. Not part of the value-level
    /// interface: the returned node exposes the tree's internal structure.
    #[cfg(feature = "diagnostics")]
    pub fn node_at(&self, index: isize) -> Result<&BasicNode<T>, BiTreeError> {
        let position = self.position(index)?;
        Ok(self
            .tree
            .level_order()
            .nth(position)
            .expect(INVARIANT_VIOLATED))
    }

    /// Counts the nodes that have neither a left nor a right child.
    pub fn leaf_count(&self) -> Result<usize, BiTreeError> {
        self.require_nodes()?;
        Ok(self.tree.leaf_count())
    }

    /// The number of levels in the tree. `0` for an empty tree.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Adds `value` as the `side` child of the node at `parent_index`.
    ///
    /// The side may be a [`Side`] or a tag that converts into one, such as
    /// `"left"` or `1u8`. An existing child is never replaced: if the slot is
    /// taken, [`BiTreeError::OccupiedSlot`] is returned.
    ///
    /// Passing `None` as the value fails with [`BiTreeError::NullValue`].
    pub fn add<V, S>(&mut self, value: V, parent_index: isize, side: S) -> Result<(), BiTreeError>
    where
        V: Into<Option<T>>,
        S: TryInto<Side>,
        BiTreeError: From<S::Error>,
    {
        let value = value.into().ok_or(BiTreeError::NullValue)?;
        let position = self.position(parent_index)?;
        let side = side.try_into()?;

        let path = self.path_to(position);
        let mut walker = self.tree.walker();
        walker.follow(&path).expect(INVARIANT_VIOLATED);
        walker.go_to(side).expect(INVARIANT_VIOLATED);
        if walker.insert(value).is_err() {
            return Err(BiTreeError::OccupiedSlot {
                index: position,
                side,
            });
        }
        drop(walker);

        self.count += 1;
        debug!(
            "added a {} child under level-order index {}, {} nodes",
            side, position, self.count
        );
        Ok(())
    }

    /// Removes the node at `index` in level order and returns the value that
    /// left the tree.
    ///
    /// A leaf is detached, and a node with one child is replaced by that child.
    /// A node with two children keeps its place and takes over the value of its
    /// in-order predecessor, whose node is removed instead; the returned value
    /// is the one that was overwritten.
    ///
    /// The root can't be removed: index `0` fails with [`BiTreeError::RootRemoval`].
    pub fn remove(&mut self, index: isize) -> Result<T, BiTreeError> {
        let position = self.position(index)?;
        if position == 0 {
            return Err(BiTreeError::RootRemoval);
        }

        let path = self.path_to(position);
        let mut walker = self.tree.walker();
        walker.follow(&path).expect(INVARIANT_VIOLATED);
        let (value, case) = walker.delete().expect(INVARIANT_VIOLATED);
        drop(walker);

        self.count -= 1;
        debug!(
            "removed level-order index {} ({:?}), {} nodes left",
            position, case, self.count
        );
        Ok(value)
    }

    /// Values in level order: the root, then each following level from left to right.
    pub fn level_order(&self) -> Result<impl Iterator<Item = &T> + '_, BiTreeError> {
        self.require_nodes()?;
        Ok(self.tree.level_order().map(BasicNode::value))
    }

    /// Values in preorder: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Result<impl Iterator<Item = &T> + '_, BiTreeError> {
        self.require_nodes()?;
        Ok(self.tree.pre_order().map(BasicNode::value))
    }

    /// Values in inorder: left subtree, node, right subtree.
    pub fn in_order(&self) -> Result<impl Iterator<Item = &T> + '_, BiTreeError> {
        self.require_nodes()?;
        Ok(self.tree.in_order().map(BasicNode::value))
    }

    /// Values in postorder: left subtree, right subtree, node.
    pub fn post_order(&self) -> Result<impl Iterator<Item = &T> + '_, BiTreeError> {
        self.require_nodes()?;
        Ok(self.tree.post_order().map(BasicNode::value))
    }

    /// Drops every node. The tree is empty afterwards.
    pub fn clear(&mut self) {
        deallocate_iteratively(&mut self.tree);
        debug!("cleared a tree of {} nodes", self.count);
        self.count = 0;
    }

    /// Checks that invariants remain correct. i.e., that the node count
    /// matches the nodes reachable from the root, and that every node hangs
    /// from its parent on the side its level-order path says it does.
    /// If it is not, panics.
    pub fn assert_correctness(&self) {
        assert_eq!(self.tree.size(), self.count, "node count is out of date");
        assert_eq!(self.tree.is_empty(), self.count == 0);

        for (position, node) in self.tree.level_order().enumerate() {
            let path = locate(&self.tree, position).expect(INVARIANT_VIOLATED);
            let mut parent = None;
            let mut current = self.tree.node().expect(INVARIANT_VIOLATED);
            for &side in &path {
                parent = Some(current);
                current = current
                    .child(side)
                    .node()
                    .expect("level-order path leads to an empty position");
            }
            assert!(std::ptr::eq(current, node), "path doesn't lead back to the node");
            match (parent, path.last()) {
                (Some(parent), Some(&side)) => {
                    let on_side = |side: Side| {
                        parent
                            .child(side)
                            .node()
                            .map_or(false, |child| std::ptr::eq(child, node))
                    };
                    assert!(on_side(side), "parent doesn't hold the node");
                    assert!(!on_side(side.flip()), "node hangs from both sides of its parent");
                }
                (None, None) => assert_eq!(position, 0, "only the root has no parent"),
                _ => unreachable!(),
            }
        }
    }
}

impl<T: PartialEq> BiTree<T> {
    /// Whether any node holds `value`. An empty tree contains nothing.
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }
}

impl<T: Clone + PartialEq> BiTree<T> {
    /// Rebuilds the tree whose preorder traversal is `preorder` and whose
    /// inorder traversal is `inorder`.
    ///
    /// Both must be non-empty and of the same length. Values are expected to be
    /// unique within the tree: with duplicates, the first matching inorder
    /// position is used, which may not be the tree the traversals came from.
    pub fn from_traversals(preorder: &[T], inorder: &[T]) -> Result<Self, BiTreeError> {
        Self::from_optional_traversals(Some(preorder), Some(inorder))
    }

    /// Like [`BiTree::from_traversals`], for callers whose traversals may be
    /// missing altogether. A missing traversal fails with [`BiTreeError::NullInput`].
    pub fn from_optional_traversals(
        preorder: Option<&[T]>,
        inorder: Option<&[T]>,
    ) -> Result<Self, BiTreeError> {
        let preorder = preorder.ok_or(BiTreeError::NullInput {
            traversal: "preorder",
        })?;
        let inorder = inorder.ok_or(BiTreeError::NullInput {
            traversal: "inorder",
        })?;
        if preorder.is_empty() {
            return Err(BiTreeError::EmptyInput {
                traversal: "preorder",
            });
        }
        if inorder.is_empty() {
            return Err(BiTreeError::EmptyInput {
                traversal: "inorder",
            });
        }
        if preorder.len() != inorder.len() {
            return Err(BiTreeError::LengthMismatch {
                preorder: preorder.len(),
                inorder: inorder.len(),
            });
        }

        let tree = BasicTree::from_traversals(preorder, inorder);
        debug!("rebuilt a tree of {} nodes from its traversals", preorder.len());
        Ok(BiTree {
            tree,
            count: preorder.len(),
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for BiTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiTree")
            .field("count", &self.count)
            .field("values", &self.tree)
            .finish()
    }
}

impl<T> Default for BiTree<T> {
    fn default() -> Self {
        BiTree::new()
    }
}

/// Frees the nodes one at a time, so that deep trees don't overflow the stack.
impl<T> Drop for BiTree<T> {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.tree);
    }
}

impl<T> IntoIterator for BiTree<T> {
    type Item = T;
    type IntoIter = iterators::IntoIter<T>;

    /// Consumes the tree, yielding its values in level order.
    fn into_iter(self) -> Self::IntoIter {
        let (tree, _) = self.destructure();
        tree.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn tree(pre: &str, ino: &str) -> BiTree<char> {
        BiTree::from_traversals(&chars(pre), &chars(ino)).unwrap()
    }

    #[test]
    fn index_bounds() {
        let tree = tree("ABC", "BAC");
        assert_eq!(tree.get_value_at(2), Ok(&'C'));
        for &index in &[-1, 3, 4] {
            assert_eq!(
                tree.get_value_at(index),
                Err(BiTreeError::IndexOutOfRange { index, count: 3 })
            );
        }
    }

    #[test]
    fn rejected_calls_leave_the_tree_alone() {
        let mut tree = tree("ABC", "BAC");
        assert_eq!(
            tree.add('X', 0, Side::Left),
            Err(BiTreeError::OccupiedSlot {
                index: 0,
                side: Side::Left
            })
        );
        assert_eq!(
            tree.add('X', 1, "sideways"),
            Err(BiTreeError::InvalidSide("sideways".to_string()))
        );
        assert_eq!(tree.add(None::<char>, 1, Side::Left), Err(BiTreeError::NullValue));
        assert_eq!(tree.remove(0), Err(BiTreeError::RootRemoval));
        assert_eq!(tree.count(), 3);
        assert_eq!(tree.level_order().unwrap().collect::<String>(), "ABC");
        tree.assert_correctness();
    }

    #[test]
    fn clear_and_reuse_queries() {
        let mut tree = tree("ABC", "BAC");
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.root_value(), None);
        assert_eq!(tree.depth(), 0);
        assert!(!tree.contains(&'A'));
        assert_eq!(tree.leaf_count(), Err(BiTreeError::EmptyTree));
        tree.assert_correctness();
    }

    #[test]
    fn debug_shows_values_in_level_order() {
        let tree = tree("ABC", "BAC");
        assert_eq!(
            format!("{:?}", tree),
            "BiTree { count: 3, values: ['A', 'B', 'C'] }"
        );
    }

    #[test]
    fn into_iter_is_level_order() {
        let tree = tree("ABDECFG", "DBEAFCG");
        assert_eq!(tree.into_iter().collect::<String>(), "ABCDEFG");
    }
}
