// This is a private module, so no documentation for it directly.
// instead look for documentation of the `BasicWalker` struct.

use super::*;
use log::trace;
use recursive_reference::*;

const NO_VALUE_ERROR: &str = "invariant violated: RecRef can't be empty";

/// The structural case a deletion was resolved with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Deletion {
    /// The node had no children and was detached.
    Leaf,
    /// The node only had a left child, which took its place.
    LeftSplice,
    /// The node only had a right child, which took its place.
    RightSplice,
    /// The node had two children. It kept its place and received the value
    /// of its in-order predecessor, which was spliced out instead.
    Predecessor,
}

/// This struct implements a walker for the [`BasicTree`] type.
/// It is struct that has a mutable reference of the tree, and allows you to walk up and down on it.
/// The walker may also be in a position which is the son of a node, but doesn't contain
/// a node by itself, and then it is said to be in an empty position.
///
/// The walker is how the tree gets its parent relation: nodes only own their
/// children, and the walker keeps the chain of subtrees from the root to the
/// current position, so going up to the parent is `O(1)`.
///
/// Internally, [`recursive_reference::RecRef`] is used, in order to be able to dynamically
/// go up and down the tree without upsetting the borrow checker.
pub struct BasicWalker<'a, T> {
    /// The telescope, holding references to all the subtrees from the root to the
    /// current position.
    rec_ref: RecRef<'a, BasicTree<T>>,

    /// This array holds for every node, whether the next subtree in the walker
    /// is its left son or the right son.
    /// This array is always one shorter than [`BasicWalker::rec_ref`],
    /// because the last node has no son in the walker.
    is_left: Vec<Side>,
}

impl<'a, T> BasicWalker<'a, T> {
    pub fn new(tree: &'a mut BasicTree<T>) -> BasicWalker<'a, T> {
        BasicWalker {
            rec_ref: RecRef::new(tree),
            is_left: vec![],
        }
    }

    /// Returns true if at an empty position.
    pub fn is_empty(&self) -> bool {
        self.rec_ref.is_empty()
    }

    /// Returns true if the walker is at the root.
    /// Note: even if you are the root, the root might still be empty.
    pub fn is_root(&self) -> bool {
        self.is_left.is_empty()
    }

    /// If the current position is the left son of a node, returns [`Some(Left)`].
    /// If the current position is the right son of a node, returns [`Some(Right)`].
    /// If at the root, returns [`None`].
    pub fn is_left_son(&self) -> Option<Side> {
        self.is_left.last().cloned()
    }

    /// How many times `go_up` can succeed from here.
    pub fn depth(&self) -> usize {
        self.is_left.len()
    }

    pub fn inner(&self) -> &BasicTree<T> {
        &*self.rec_ref
    }

    pub fn node(&self) -> Option<&BasicNode<T>> {
        self.rec_ref.node()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut BasicNode<T>> {
        self.rec_ref.node_mut()
    }

    pub fn value(&self) -> Option<&T> {
        Some(self.node()?.value())
    }

    /// Moves to the `side` son of the current node, which may be an empty position.
    /// Fails if the walker is at an empty position.
    pub fn go_to(&mut self, side: Side) -> Result<(), ()> {
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| {
            if let Some(node) = tree.node_mut() {
                Ok(node.child_mut(side))
            } else {
                Err(())
            }
        });
        if res.is_ok() {
            self.is_left.push(side);
        }
        res
    }

    pub fn go_left(&mut self) -> Result<(), ()> {
        self.go_to(Side::Left)
    }

    pub fn go_right(&mut self) -> Result<(), ()> {
        self.go_to(Side::Right)
    }

    /// Moves to the parent, returning which son of it we came from.
    /// Fails at the root.
    pub fn go_up(&mut self) -> Result<Side, ()> {
        match self.is_left.pop() {
            None => Err(()),
            Some(side) => {
                RecRef::pop(&mut self.rec_ref).expect(NO_VALUE_ERROR);
                Ok(side)
            }
        }
    }

    pub fn go_to_root(&mut self) {
        while let Ok(_) = self.go_up() {}
    }

    /// Follows `path` from the current position, one son per step.
    /// Stops and fails at the first step that would leave an empty position.
    pub fn follow(&mut self, path: &[Side]) -> Result<(), ()> {
        for &side in path {
            self.go_to(side)?;
        }
        Ok(())
    }

    /// Takes the current subtree out of the tree, and writes `Empty` instead.
    /// Intended to help writing tree algorithms.
    pub(crate) fn take_subtree(&mut self) -> BasicTree<T> {
        std::mem::replace(&mut *self.rec_ref, BasicTree::Empty)
    }

    /// If the current position is empty, puts the given value there instead.
    /// Intended to help writing tree algorithms.
    pub(crate) fn put_subtree(&mut self, new: BasicTree<T>) -> Option<()> {
        if self.rec_ref.is_empty() {
            *self.rec_ref = new;
            Some(())
        } else {
            None
        }
    }

    /// Inserts the value into the tree at the current empty position.
    /// If the current position is not empty, return the value back.
    /// When the function returns, the walker will be at the inserted node.
    pub fn insert(&mut self, value: T) -> Result<(), T> {
        match *self.rec_ref {
            Empty => {
                *self.rec_ref = BasicTree::from_node(BasicNode::new(value));
                Ok(())
            }
            _ => Err(value),
        }
    }

    /// Removes the current value from the tree, and returns it along with the
    /// case that was applied. If currently at an empty position, returns [`None`].
    ///
    /// * A leaf is detached, leaving an empty position.
    /// * A node with a single child is replaced by that child's subtree.
    /// * A node with two children stays in place and takes the value of its
    ///   in-order predecessor (the rightmost node of its left subtree). That
    ///   predecessor is then replaced by its own left subtree.
    ///
    /// The walker stays at the same position.
    pub fn delete(&mut self) -> Option<(T, Deletion)> {
        let node = self.node_mut()?;
        let case = match (node.left.is_empty(), node.right.is_empty()) {
            (true, true) => Deletion::Leaf,
            (false, true) => Deletion::LeftSplice,
            (true, false) => Deletion::RightSplice,
            (false, false) => Deletion::Predecessor,
        };
        trace!("deleting at depth {} as {:?}", self.depth(), case);

        let value = match case {
            Deletion::Leaf => self.take_subtree().into_node()?.value,
            Deletion::LeftSplice => {
                let node = self.take_subtree().into_node()?;
                self.put_subtree(node.left).expect(NO_VALUE_ERROR);
                node.value
            }
            Deletion::RightSplice => {
                let node = self.take_subtree().into_node()?;
                self.put_subtree(node.right).expect(NO_VALUE_ERROR);
                node.value
            }
            Deletion::Predecessor => {
                let node = self.node_mut()?;
                let predecessor = take_rightmost(&mut node.left)?;
                std::mem::replace(&mut node.value, predecessor)
            }
        };
        Some((value, case))
    }
}

/// Removes the rightmost node of `tree`, splicing its left subtree into its
/// place, and returns its value. Returns [`None`] for an empty tree.
fn take_rightmost<T>(tree: &mut BasicTree<T>) -> Option<T> {
    let mut walker = tree.walker();
    if walker.is_empty() {
        return None;
    }
    while let Ok(()) = walker.go_right() {}
    // went one step too far: the empty right son of the rightmost node
    walker.go_up().expect(NO_VALUE_ERROR);

    let rightmost = walker.take_subtree().into_node().expect(NO_VALUE_ERROR);
    walker.put_subtree(rightmost.left).expect(NO_VALUE_ERROR);
    Some(rightmost.value)
}
