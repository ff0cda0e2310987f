#![allow(dead_code)]

pub use bitree::*;

use rand::{self, Rng};

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Builds a tree from traversals written as strings, one value per character.
pub fn tree(preorder: &str, inorder: &str) -> BiTree<char> {
    BiTree::from_traversals(&chars(preorder), &chars(inorder)).unwrap()
}

pub fn level_string(tree: &BiTree<char>) -> String {
    tree.level_order().unwrap().collect()
}

/// Installs a logger once per test binary; later calls are ignored.
pub fn init_logging() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Trace)
        .init();
}

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Add { parent: usize, side: Side },
    Remove { index: usize },
}

/// Grows a tree of `len` nodes with values `0..len` by attaching every new
/// value to a random free slot.
pub fn random_tree(len: u32) -> BiTree<u32> {
    let mut rng = rand::thread_rng();
    let mut tree = BiTree::from_traversals(&[0u32], &[0u32]).unwrap();
    let mut value: u32 = 1;
    while value < len {
        let parent = rng.gen_range(0..tree.count()) as isize;
        let side = if rng.gen() { Side::Left } else { Side::Right };
        if tree.add(value, parent, side).is_ok() {
            value += 1;
        }
    }
    tree
}

/// A plain arena tree with explicit parent links, used as the reference the
/// real tree is checked against.
#[derive(Clone, Debug)]
pub struct ModelTree<T> {
    nodes: Vec<ModelNode<T>>,
    root: Option<usize>,
}

#[derive(Clone, Debug)]
struct ModelNode<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
}

impl<T: Clone> ModelTree<T> {
    pub fn single(value: T) -> Self {
        ModelTree {
            nodes: vec![ModelNode {
                value,
                left: None,
                right: None,
                parent: None,
            }],
            root: Some(0),
        }
    }

    fn level_ids(&self) -> Vec<usize> {
        let mut res: Vec<usize> = self.root.into_iter().collect();
        let mut i = 0;
        while i < res.len() {
            let node = &self.nodes[res[i]];
            res.extend(node.left);
            res.extend(node.right);
            i += 1;
        }
        res
    }

    pub fn level_order(&self) -> Vec<T> {
        self.level_ids()
            .into_iter()
            .map(|id| self.nodes[id].value.clone())
            .collect()
    }

    /// Nodes with neither child link set.
    pub fn leaf_count(&self) -> usize {
        self.level_ids()
            .into_iter()
            .filter(|&id| self.nodes[id].left.is_none() && self.nodes[id].right.is_none())
            .count()
    }

    pub fn len(&self) -> usize {
        self.level_ids().len()
    }

    pub fn add(&mut self, value: T, parent: usize, side: Side) -> bool {
        let parent = match self.level_ids().get(parent) {
            Some(&id) => id,
            None => return false,
        };
        let slot = match side {
            Side::Left => self.nodes[parent].left,
            Side::Right => self.nodes[parent].right,
        };
        if slot.is_some() {
            return false;
        }
        self.nodes.push(ModelNode {
            value,
            left: None,
            right: None,
            parent: Some(parent),
        });
        let id = self.nodes.len() - 1;
        match side {
            Side::Left => self.nodes[parent].left = Some(id),
            Side::Right => self.nodes[parent].right = Some(id),
        }
        true
    }

    /// Points whichever child link of `parent` held `old` at `new`, and
    /// `new`'s parent link back at `parent`.
    fn relink(&mut self, parent: usize, old: usize, new: Option<usize>) {
        if self.nodes[parent].left == Some(old) {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
        if let Some(new) = new {
            self.nodes[new].parent = Some(parent);
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        let id = *self.level_ids().get(index)?;
        let parent = self.nodes[id].parent?;
        let node = self.nodes[id].clone();
        match (node.left, node.right) {
            (None, None) => self.relink(parent, id, None),
            (Some(left), None) => self.relink(parent, id, Some(left)),
            (None, Some(right)) => self.relink(parent, id, Some(right)),
            (Some(left), Some(_)) => {
                let mut pred = left;
                while let Some(right) = self.nodes[pred].right {
                    pred = right;
                }
                let pred_parent = self.nodes[pred].parent.unwrap();
                let pred_left = self.nodes[pred].left;
                self.nodes[id].value = self.nodes[pred].value.clone();
                self.relink(pred_parent, pred, pred_left);
            }
        }
        Some(node.value)
    }

    /// Every child points back at its parent, and every parent at its child.
    pub fn assert_links(&self) {
        for id in self.level_ids() {
            let node = &self.nodes[id];
            for child in node.left.into_iter().chain(node.right) {
                assert_eq!(self.nodes[child].parent, Some(id));
            }
            if let Some(parent) = node.parent {
                let parent = &self.nodes[parent];
                assert!((parent.left == Some(id)) != (parent.right == Some(id)));
            }
        }
    }
}
