use super::*;
use log::trace;
use std::collections::VecDeque;

/// Resolves a level-order index to the path from the root to that node: the
/// sequence of sons to take, one per level. The root's path is empty.
///
/// Returns [`None`] if the tree has no node at `index`.
///
/// The breadth-first scan hands out positions in the order nodes are queued,
/// which is also the order they come out in, so a node's position is its
/// level-order index. Every position remembers its parent's position and the
/// side it hangs on, and the path is read back from those links.
pub fn locate<T>(tree: &BasicTree<T>, index: usize) -> Option<Vec<Side>> {
    let root = tree.node()?;
    let mut links: Vec<Option<(usize, Side)>> = vec![None];
    let mut queue: VecDeque<(usize, &BasicNode<T>)> = VecDeque::new();
    queue.push_back((0, root));

    while let Some((position, node)) = queue.pop_front() {
        if position == index {
            let mut path = vec![];
            let mut current = position;
            while let Some((parent, side)) = links[current] {
                path.push(side);
                current = parent;
            }
            path.reverse();
            trace!("level-order index {} resolved to {:?}", index, path);
            return Some(path);
        }
        for &side in &Side::BOTH {
            if let Some(child) = node.child(side).node() {
                links.push(Some((position, side)));
                queue.push_back((links.len() - 1, child));
            }
        }
    }
    None
}
