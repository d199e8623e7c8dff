//! Lazy in-order enumeration
//!
//! Explicit-stack rendition of the recursive formulation
//! `walk(n) = walk(n.left) ++ [n.key] ++ walk(n.right)`:
//!
//! - A frame is a node whose key and right subtree are still pending
//!   (a suspended recursive call that already delegated to its left child).
//! - Advancing descends left from the pending subtree pushing frames, then
//!   pops one frame, yields its key and makes its right child pending.
//!
//! Frames only ever hold ancestors of the current position, so the stack
//! is bounded by tree height. The cursor also tracks the direction path
//! to its position (one bit per level) so it can be checkpointed.

use std::iter::FusedIterator;
use std::mem;

use bitvec::prelude::*;
use tracing::{debug, trace};

use super::checkpoint::{Checkpoint, Direction};
use super::TreeNode;
use crate::space::{SpaceProfile, SpaceTracker};

/// Suspended node: key and right subtree not yet produced
#[derive(Debug)]
struct Frame<'a, K> {
    node: &'a TreeNode<K>,

    /// Distance from the root (root = 0)
    depth: usize,
}

/// Lazy in-order cursor over a borrowed tree
///
/// Stack depth: O(h)
/// Per step: O(1) amortized plus the left descent
#[derive(Debug)]
pub struct Inorder<'a, K> {
    /// Subtree not yet descended into
    pending: Option<&'a TreeNode<K>>,

    /// Depth of `pending`
    pending_depth: usize,

    /// Suspended ancestors, innermost last
    frames: Vec<Frame<'a, K>>,

    /// Directions from the root to `pending`, or to the last yielded node
    path: BitVec<u8, Lsb0>,

    /// Nodes touched so far
    visited: usize,

    /// Keys produced so far
    yielded: usize,

    /// Frame accounting
    tracker: SpaceTracker,
}

/// Start a lazy in-order enumeration; no node is touched until the first pull
pub fn enumerate<K>(root: Option<&TreeNode<K>>) -> Inorder<'_, K> {
    Inorder::new(root)
}

impl<'a, K> Inorder<'a, K> {
    /// Create cursor positioned before the first key
    pub fn new(root: Option<&'a TreeNode<K>>) -> Self {
        trace!(empty = root.is_none(), "created in-order cursor");
        Self {
            pending: root,
            pending_depth: 0,
            frames: Vec::new(),
            path: BitVec::new(),
            visited: 0,
            yielded: 0,
            tracker: SpaceTracker::new(),
        }
    }

    /// Rebuild a cursor from explicit state (checkpoint resume)
    pub(super) fn from_parts(
        path: BitVec<u8, Lsb0>,
        ancestors: Vec<(&'a TreeNode<K>, usize)>,
        yielded: usize,
    ) -> Self {
        let mut cursor = Self {
            pending: None,
            pending_depth: 0,
            frames: Vec::with_capacity(ancestors.len()),
            path,
            visited: 0,
            yielded,
            tracker: SpaceTracker::new(),
        };
        for (node, depth) in ancestors {
            cursor.push_frame(node, depth);
        }
        cursor
    }

    /// Nodes touched so far (pushed as frames)
    pub fn nodes_visited(&self) -> usize {
        self.visited
    }

    /// Keys produced so far
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Live frame count
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Frame usage so far
    pub fn profile(&self) -> SpaceProfile {
        self.tracker.snapshot()
    }

    /// Check if no keys remain; does not advance
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_none() && self.frames.is_empty()
    }

    /// Capture the position as a direction path to the next key's node
    ///
    /// Follows the left spine of the pending subtree when there is one,
    /// reading (but not visiting) those nodes.
    pub fn checkpoint(&self) -> Checkpoint {
        if let Some(mut node) = self.pending {
            let mut path = self.path.clone();
            while let Some(left) = node.left.as_deref() {
                path.push(Direction::Left.bit());
                node = left;
            }
            return Checkpoint::new(path, self.yielded);
        }

        match self.frames.last() {
            Some(top) => Checkpoint::new(self.path[..top.depth].to_bitvec(), self.yielded),
            None => Checkpoint::exhausted(self.yielded),
        }
    }

    fn push_frame(&mut self, node: &'a TreeNode<K>, depth: usize) {
        self.frames.push(Frame { node, depth });
        self.tracker.push_frame(mem::size_of::<Frame<'a, K>>());
        self.visited += 1;
    }

    /// Push the left spine of the pending subtree
    fn descend(&mut self) {
        let Some(mut node) = self.pending.take() else {
            return;
        };
        let mut depth = self.pending_depth;

        loop {
            self.push_frame(node, depth);
            match node.left.as_deref() {
                Some(left) => {
                    self.path.push(Direction::Left.bit());
                    node = left;
                    depth += 1;
                }
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.descend();

        let Frame { node, depth } = self.frames.pop()?;
        self.tracker.pop_frame();
        self.path.truncate(depth);

        if let Some(right) = node.right.as_deref() {
            self.path.push(Direction::Right.bit());
            self.pending = Some(right);
            self.pending_depth = depth + 1;
        }

        self.yielded += 1;
        // Logged once, as the last key leaves
        if self.is_exhausted() {
            debug!(
                yielded = self.yielded,
                peak_depth = self.tracker.peak_depth(),
                "in-order cursor exhausted"
            );
        }
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = self.frames.len() + usize::from(self.pending.is_some());
        (lower, None)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}
