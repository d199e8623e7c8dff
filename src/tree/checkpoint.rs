//! Cursor checkpoints
//!
//! A suspended cursor is fully described by the direction path from the
//! root to the node holding the next key: every ancestor where the path
//! turns left is a pending frame, every ancestor where it turns right has
//! already been produced. Path token = 1 bit per level.

use std::fmt;

use bitvec::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::{Inorder, TreeNode};

/// Which child the path takes at a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Into the left child
    Left,

    /// Into the right child
    Right,
}

impl Direction {
    /// Bit encoding (left = 0)
    #[inline]
    pub fn bit(self) -> bool {
        matches!(self, Direction::Right)
    }

    /// Decode from bit
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Errors raised when resuming a checkpoint
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckpointError {
    /// Path continues below a missing child
    #[error("Checkpoint path leaves the tree at depth {depth}")]
    PathOutOfBounds {
        /// Level at which the child was absent
        depth: usize,
    },

    /// Non-exhausted checkpoint resumed against an absent root
    #[error("Cannot resume a pending checkpoint on an empty tree")]
    EmptyTree,
}

/// Captured cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Directions from the root to the next node to produce
    path: BitVec<u8, Lsb0>,

    /// Keys already produced before the checkpoint
    yielded: usize,

    /// No keys remain
    exhausted: bool,
}

impl Checkpoint {
    pub(super) fn new(path: BitVec<u8, Lsb0>, yielded: usize) -> Self {
        Self {
            path,
            yielded,
            exhausted: false,
        }
    }

    pub(super) fn exhausted(yielded: usize) -> Self {
        Self {
            path: BitVec::new(),
            yielded,
            exhausted: true,
        }
    }

    /// Path length in levels
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Keys produced before the checkpoint was taken
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Check if the checkpoint was taken after the last key
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Directions from the root, outermost first
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.path.iter().by_vals().map(Direction::from_bit)
    }

    /// Rebuild a cursor over `root` that continues from this position
    ///
    /// Descends once along the path, re-suspending every ancestor the path
    /// leaves through its left child. Space: O(depth).
    pub fn resume<'a, K>(
        &self,
        root: Option<&'a TreeNode<K>>,
    ) -> Result<Inorder<'a, K>, CheckpointError> {
        if self.exhausted {
            return Ok(Inorder::from_parts(BitVec::new(), Vec::new(), self.yielded));
        }

        let mut node = root.ok_or(CheckpointError::EmptyTree)?;
        let mut ancestors = Vec::new();

        for (depth, direction) in self.directions().enumerate() {
            let child = match direction {
                Direction::Left => {
                    ancestors.push((node, depth));
                    node.left.as_deref()
                }
                Direction::Right => node.right.as_deref(),
            };
            node = child.ok_or(CheckpointError::PathOutOfBounds { depth })?;
        }
        ancestors.push((node, self.path.len()));

        debug!(
            depth = self.path.len(),
            frames = ancestors.len(),
            yielded = self.yielded,
            "resumed cursor from checkpoint"
        );

        Ok(Inorder::from_parts(self.path.clone(), ancestors, self.yielded))
    }
}

impl fmt::Display for Checkpoint {
    /// `L`/`R` string from the root; `^` for the root itself, `$` when exhausted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exhausted {
            return write!(f, "$@{}", self.yielded);
        }
        if self.path.is_empty() {
            write!(f, "^")?;
        }
        for direction in self.directions() {
            let token = match direction {
                Direction::Left => 'L',
                Direction::Right => 'R',
            };
            write!(f, "{}", token)?;
        }
        write!(f, "@{}", self.yielded)
    }
}
