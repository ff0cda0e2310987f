//! Rebuilding a tree from its preorder and inorder traversals.

use super::*;

/// One pending step of the reconstruction.
enum Task<'a, T> {
    /// Build the subtree with these preorder and inorder slices.
    Build(&'a [T], &'a [T]),
    /// Pop the right and then the left subtree off the result stack, and join
    /// them under a new node holding this value.
    Join(&'a T),
}

impl<T: Clone + PartialEq> BasicTree<T> {
    /// Builds the tree whose preorder traversal is `preorder` and whose inorder
    /// traversal is `inorder`. The two slices must have the same length.
    ///
    /// The first value of the preorder slice is the root. Its first occurrence
    /// in the inorder slice splits that slice into the left and right subtrees,
    /// and the size of the left part splits the rest of the preorder slice the
    /// same way. Both halves are then built the same way.
    ///
    /// Values are expected to be unique. If a root value can't be found in the
    /// inorder slice at all, the rest of that subtree is placed to its left.
    /// Slices of different lengths are handled the same way. Either way the
    /// result has exactly `preorder.len()` nodes.
    ///
    /// The recursion runs on an explicit stack, so degenerate (fully oblique)
    /// trees of any depth can be built.
    pub(crate) fn from_traversals(preorder: &[T], inorder: &[T]) -> BasicTree<T> {
        let mut tasks = vec![Task::Build(preorder, inorder)];
        let mut built: Vec<BasicTree<T>> = vec![];

        while let Some(task) = tasks.pop() {
            match task {
                Task::Build(preorder, inorder) => {
                    let (root, rest) = match preorder.split_first() {
                        None => {
                            built.push(Empty);
                            continue;
                        }
                        Some(split) => split,
                    };
                    let split = inorder
                        .iter()
                        .position(|value| value == root)
                        .unwrap_or(inorder.len());

                    let left_inorder = &inorder[..split];
                    let right_inorder = inorder.get(split + 1..).unwrap_or(&[]);
                    let (left_preorder, right_preorder) =
                        rest.split_at(left_inorder.len().min(rest.len()));

                    // the left subtree is popped first, so it's built first
                    tasks.push(Task::Join(root));
                    tasks.push(Task::Build(right_preorder, right_inorder));
                    tasks.push(Task::Build(left_preorder, left_inorder));
                }
                Task::Join(value) => {
                    let right = built.pop().expect("right subtree was built");
                    let left = built.pop().expect("left subtree was built");
                    built.push(BasicTree::from_node(BasicNode {
                        value: value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }
        debug_assert_eq!(built.len(), 1);
        built.pop().unwrap_or(Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::basic_tree::iterators::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn full_tree() {
        let tree = BasicTree::from_traversals(&chars("ABDECFG"), &chars("DBEAFCG"));
        let level: String = LevelOrder::new(&tree).map(|node| node.value).collect();
        assert_eq!(level, "ABCDEFG");
    }

    #[test]
    fn oblique_trees() {
        let left = BasicTree::from_traversals(&chars("ABCDE"), &chars("EDCBA"));
        let mut tree = &left;
        for expected in chars("ABCDE") {
            let node = tree.node().unwrap();
            assert_eq!(node.value, expected);
            assert!(node.right.is_empty());
            tree = &node.left;
        }
        assert!(tree.is_empty());

        let right = BasicTree::from_traversals(&chars("ABCDE"), &chars("ABCDE"));
        let mut tree = &right;
        for expected in chars("ABCDE") {
            let node = tree.node().unwrap();
            assert_eq!(node.value, expected);
            assert!(node.left.is_empty());
            tree = &node.right;
        }
    }

    #[test]
    fn traversals_are_reproduced() {
        let preorder = chars("ABDHIKLMECFJG");
        let inorder = chars("HDKIMLBEAFJCG");
        let tree = BasicTree::from_traversals(&preorder, &inorder);
        let pre: Vec<char> = PreOrder::new(&tree).map(|node| node.value).collect();
        let ino: Vec<char> = InOrder::new(&tree).map(|node| node.value).collect();
        assert_eq!(pre, preorder);
        assert_eq!(ino, inorder);
    }

    #[test]
    fn inconsistent_pair_keeps_every_value() {
        let tree = BasicTree::from_traversals(&chars("ABC"), &chars("XYZ"));
        assert_eq!(PreOrder::new(&tree).count(), 3);
    }

    #[test]
    fn mismatched_lengths_keep_every_preorder_value() {
        let longer = BasicTree::from_traversals(&chars("ABC"), &chars("B"));
        let pre: String = PreOrder::new(&longer).map(|node| node.value).collect();
        assert_eq!(pre, "ABC");

        let shorter = BasicTree::from_traversals(&chars("A"), &chars("XYZ"));
        let pre: String = PreOrder::new(&shorter).map(|node| node.value).collect();
        assert_eq!(pre, "A");

        let no_inorder = BasicTree::from_traversals(&chars("AB"), &[]);
        assert_eq!(PreOrder::new(&no_inorder).count(), 2);
    }
}
