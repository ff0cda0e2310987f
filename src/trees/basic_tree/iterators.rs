//! Traversal iterators over a [`BasicTree`].
//!
//! All of them keep an explicit queue or stack instead of recursing, so the
//! shape of the tree never limits how deep they can go. They yield nodes;
//! [`crate::BiTree`] maps them to values.

use super::*;
use std::collections::VecDeque;

/// Breadth-first iterator: the root, then every node of depth 1 from left to
/// right, then depth 2, and so on.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a BasicNode<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub fn new(tree: &'a BasicTree<T>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(node) = tree.node() {
            queue.push_back(node);
        }
        LevelOrder { queue }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a BasicNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for &side in &Side::BOTH {
            if let Some(child) = node.child(side).node() {
                self.queue.push_back(child);
            }
        }
        Some(node)
    }
}

/// Node, then left subtree, then right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a BasicNode<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub fn new(tree: &'a BasicTree<T>) -> Self {
        PreOrder {
            stack: tree.node().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a BasicNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right goes in first so that left comes out first
        if let Some(right) = node.right.node() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.node() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Left subtree, then node, then right subtree.
pub struct InOrder<'a, T> {
    // every node on the stack still has to be yielded, followed by its right subtree
    stack: Vec<&'a BasicNode<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub fn new(tree: &'a BasicTree<T>) -> Self {
        let mut res = InOrder { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: &'a BasicTree<T>) {
        while let Some(node) = tree.node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a BasicNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node)
    }
}

/// Left subtree, then right subtree, then node.
pub struct PostOrder<'a, T> {
    // the flag tells whether the node's subtrees were already pushed
    stack: Vec<(&'a BasicNode<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub fn new(tree: &'a BasicTree<T>) -> Self {
        PostOrder {
            stack: tree.node().map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a BasicNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.node() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.node() {
                self.stack.push((left, false));
            }
        }
    }
}

/// Owning iterator, yielding the values in level order.
/// Nodes are freed one at a time as they are visited, and whatever is left
/// when the iterator is dropped is freed the same way.
pub struct IntoIter<T> {
    queue: VecDeque<Box<BasicNode<T>>>,
}

impl<T> IntoIter<T> {
    pub fn new(tree: BasicTree<T>) -> Self {
        IntoIter {
            queue: tree.into_node_boxed().into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = *self.queue.pop_front()?;
        let BasicNode { value, left, right } = node;
        self.queue.extend(left.into_node_boxed());
        self.queue.extend(right.into_node_boxed());
        Some(value)
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self {}
    }
}
