//! Owned binary tree node
//!
//! Each node exclusively owns its children through `Box`, so the
//! structure is a strict ownership tree: finite, acyclic, no sharing.
//! Depth-dependent operations (height, size, clone, equality, formatting,
//! drop) run on an explicit stack so degenerate chains of any length are
//! safe. The optional serde derives recurse once per level.

use std::fmt;

use super::Inorder;

/// Child link: absent or exclusively owned subtree
pub type Link<K> = Option<Box<TreeNode<K>>>;

/// Binary tree node
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode<K> {
    /// Key (opaque to traversal)
    pub key: K,

    /// Left subtree
    pub left: Link<K>,

    /// Right subtree
    pub right: Link<K>,
}

impl<K> TreeNode<K> {
    /// Create a leaf
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Create a node with both children given
    pub fn new(key: K, left: Option<TreeNode<K>>, right: Option<TreeNode<K>>) -> Self {
        Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Builder: attach a left subtree
    pub fn with_left(mut self, left: TreeNode<K>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Builder: attach a right subtree
    pub fn with_right(mut self, right: TreeNode<K>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Lazy in-order iterator over the keys of this subtree
    pub fn iter(&self) -> Inorder<'_, K> {
        Inorder::new(Some(self))
    }

    /// Number of nodes in this subtree
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        count
    }

    /// Always false: a node is at least one element
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Height in nodes (a leaf has height 1)
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut pending = vec![(self, 1usize)];

        while let Some((node, level)) = pending.pop() {
            max = max.max(level);
            if let Some(left) = node.left.as_deref() {
                pending.push((left, level + 1));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, level + 1));
            }
        }

        max
    }
}

impl<K> Drop for TreeNode<K> {
    // Detach children onto a heap stack; the default recursive drop
    // overflows on long chains.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<K>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a, K> IntoIterator for &'a TreeNode<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formatting step for the parenthesized form
enum Piece<'a, K> {
    Node(&'a TreeNode<K>),
    Key(&'a K),
    Text(&'static str),
}

impl<K> TreeNode<K> {
    /// Parenthesized form: `(left key right)`, `-` for absent children
    fn fmt_nested<F>(&self, f: &mut fmt::Formatter<'_>, write_key: F) -> fmt::Result
    where
        F: Fn(&K, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(node) if node.is_leaf() => write_key(&node.key, f)?,
                Piece::Node(node) => {
                    // Pushed in reverse of output order
                    pending.push(Piece::Text(")"));
                    pending.push(node.right.as_deref().map_or(Piece::Text("-"), Piece::Node));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Key(&node.key));
                    pending.push(Piece::Text(" "));
                    pending.push(node.left.as_deref().map_or(Piece::Text("-"), Piece::Node));
                    pending.push(Piece::Text("("));
                }
                Piece::Key(key) => write_key(key, f)?,
                Piece::Text(text) => f.write_str(text)?,
            }
        }

        Ok(())
    }
}

impl<K: fmt::Display> fmt::Display for TreeNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, |key, f| fmt::Display::fmt(key, f))
    }
}

impl<K: fmt::Debug> fmt::Debug for TreeNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, |key, f| fmt::Debug::fmt(key, f))
    }
}

impl<K: Clone> Clone for TreeNode<K> {
    fn clone(&self) -> Self {
        let mut root = TreeNode::leaf(self.key.clone());
        let mut pending: Vec<(&TreeNode<K>, &mut TreeNode<K>)> = vec![(self, &mut root)];

        while let Some((src, dst)) = pending.pop() {
            if let Some(left) = src.left.as_deref() {
                let slot = dst.left.insert(Box::new(TreeNode::leaf(left.key.clone())));
                pending.push((left, &mut **slot));
            }
            if let Some(right) = src.right.as_deref() {
                let slot = dst.right.insert(Box::new(TreeNode::leaf(right.key.clone())));
                pending.push((right, &mut **slot));
            }
        }
        drop(pending);

        root
    }
}

impl<K: PartialEq> PartialEq for TreeNode<K> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.key != b.key {
                return false;
            }
            for pair in [(&a.left, &b.left), (&a.right, &b.right)] {
                match pair {
                    (Some(x), Some(y)) => pending.push((&**x, &**y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<K: Eq> Eq for TreeNode<K> {}
