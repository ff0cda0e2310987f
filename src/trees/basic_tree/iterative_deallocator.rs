use super::*;

/// The auto-generated deallocation code for [`BasicTree`] is recursive.
/// Since a tree rebuilt from traversals can be arbitrarily deep (a fully
/// oblique tree has one level per node), dropping it recursively could
/// overflow the stack.
///
/// Therefore, we have this tiny struct in order to deallocate a [`BasicTree`] in an iterative way.
/// From the user's perspective this is a function from the `basic_tree` module.
struct IterativeDeallocator<T> {
    stack: Vec<Box<BasicNode<T>>>,
}

impl<T> IterativeDeallocator<T> {
    fn step(&mut self) -> Option<()> {
        let mut node = self.stack.pop()?;
        self.push(std::mem::replace(&mut node.left, Empty));
        self.push(std::mem::replace(&mut node.right, Empty));
        Some(())
    }

    fn push(&mut self, tree: BasicTree<T>) {
        if let Some(node) = tree.into_node_boxed() {
            self.stack.push(node);
        }
    }
}

/// Replaces the tree with an empty tree, and deallocates the tree iteratively.
/// Input is a reference and not an owned value so that this function can get
/// called in `Drop` implementations.
pub fn deallocate_iteratively<T>(tree: &mut BasicTree<T>) {
    let my_tree = std::mem::replace(tree, BasicTree::new());
    let mut deallocator = IterativeDeallocator { stack: vec![] };
    deallocator.push(my_tree);
    while let Some(_) = deallocator.step() {}
}

#[test]
fn deep_tree_deallocation() {
    let mut tree = Empty;
    for value in 0..200_000u32 {
        tree = BasicTree::from_node(BasicNode {
            value,
            left: tree,
            right: Empty,
        });
    }
    deallocate_iteratively(&mut tree);
    assert!(tree.is_empty());
}
