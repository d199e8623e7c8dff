//! Tree construction helpers
//!
//! Trees are built outside the enumerator; these are the shapes the crate,
//! its binary and its tests need: search-ordered insertion, degenerate
//! chains and balanced trees.

use std::cmp::Ordering;

use super::{Inorder, Link, TreeNode};

/// Binary search tree built by insertion
///
/// Equal keys go right, so duplicates enumerate in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> SearchTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key (iterative descent)
    pub fn insert(&mut self, key: K) {
        let mut slot = &mut self.root;
        loop {
            match slot {
                Some(node) => {
                    slot = match key.cmp(&node.key) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal | Ordering::Greater => &mut node.right,
                    };
                }
                None => {
                    *slot = Some(Box::new(TreeNode::leaf(key)));
                    break;
                }
            }
        }
        self.len += 1;
    }
}

impl<K> SearchTree<K> {
    /// Root node, absent when empty
    pub fn root(&self) -> Option<&TreeNode<K>> {
        self.root.as_deref()
    }

    /// Take ownership of the root
    pub fn into_root(mut self) -> Option<TreeNode<K>> {
        self.root.take().map(|node| *node)
    }

    /// Number of keys inserted
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no keys were inserted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height in nodes (0 when empty)
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// Lazy in-order iterator (sorted order)
    pub fn iter(&self) -> Inorder<'_, K> {
        Inorder::new(self.root())
    }
}

impl<K: Ord> FromIterator<K> for SearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K: Ord> Extend<K> for SearchTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a SearchTree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Right-only chain; in-order equals the given order
pub fn right_chain<K, I>(keys: I) -> Option<TreeNode<K>>
where
    I: IntoIterator<Item = K>,
    I::IntoIter: DoubleEndedIterator,
{
    // Built bottom-up so no recursion is needed
    keys.into_iter().rev().fold(None, |below, key| {
        let mut node = TreeNode::leaf(key);
        node.right = below.map(Box::new);
        Some(node)
    })
}

/// Left-only chain; in-order equals the given order
pub fn left_chain<K, I>(keys: I) -> Option<TreeNode<K>>
where
    I: IntoIterator<Item = K>,
{
    keys.into_iter().fold(None, |below, key| {
        let mut node = TreeNode::leaf(key);
        node.left = below.map(Box::new);
        Some(node)
    })
}

/// Balanced tree via midpoint split; in-order equals the slice order
///
/// Height: ⌈log2(n + 1)⌉
pub fn balanced<K: Clone>(keys: &[K]) -> Option<TreeNode<K>> {
    if keys.is_empty() {
        return None;
    }

    let mid = keys.len() / 2;
    let mut node = TreeNode::leaf(keys[mid].clone());
    node.left = balanced(&keys[..mid]).map(Box::new);
    node.right = balanced(&keys[mid + 1..]).map(Box::new);
    Some(node)
}

/// Five-node fixture:
///
/// ```text
///       10
///      /  \
///     5    15
///    / \
///   3   7
/// ```
pub fn sample_tree() -> TreeNode<i32> {
    TreeNode::leaf(10)
        .with_left(TreeNode::leaf(5).with_left(TreeNode::leaf(3)).with_right(TreeNode::leaf(7)))
        .with_right(TreeNode::leaf(15))
}
