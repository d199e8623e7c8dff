//! # Lazy In-Order Tree Traversal
//!
//! Enumerates the keys of a binary tree in in-order (left, node, right),
//! one key per pull, holding O(h) state where h is the tree height.
//!
//! ## Core Algorithm
//!
//! 1. **Explicit frames**: each suspended recursive call is a frame
//!    (node whose key and right subtree are pending)
//! 2. **Left descent**: advancing pushes the left spine of the pending subtree
//! 3. **Pop and yield**: the top frame produces its key, its right child
//!    becomes pending
//! 4. **Checkpoints**: the position is a bit path from the root, so a
//!    cursor can be captured and rebuilt
//!
//! ## Usage Example
//!
//! ```
//! use inorder_walk::{enumerate, TreeNode};
//!
//! let root = TreeNode::leaf(10)
//!     .with_left(TreeNode::leaf(5).with_left(TreeNode::leaf(3)).with_right(TreeNode::leaf(7)))
//!     .with_right(TreeNode::leaf(15));
//!
//! let keys: Vec<i32> = enumerate(Some(&root)).copied().collect();
//! assert_eq!(keys, vec![3, 5, 7, 10, 15]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod space; // Frame accounting
pub mod tree; // Tree, cursor, checkpoints

// Re-exports for convenience
pub use space::{SpaceProfile, SpaceTracker};
pub use tree::{
    balanced, enumerate, left_chain, right_chain, sample_tree, Checkpoint, CheckpointError,
    Direction, Inorder, SearchTree, TreeNode,
};

use thiserror::Error;
use tracing::{debug, info};

/// Walk driver: pulls keys from a cursor under a configuration
#[derive(Debug)]
pub struct Walker<'a, K> {
    root: Option<&'a TreeNode<K>>,
    config: WalkConfig,
}

/// Configuration parameters for a walk
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Stop after this many keys (None = until exhaustion)
    pub take: Option<usize>,

    /// Resume from a checkpoint instead of the first key
    pub resume_from: Option<Checkpoint>,

    /// Report frame usage in the summary
    pub profile_space: bool,

    /// Enable detailed logging
    pub verbose: bool,
}

impl WalkConfig {
    /// Walk the whole tree
    pub fn full() -> Self {
        Self::default()
    }

    /// Walk only the first `n` keys
    pub fn first(n: usize) -> Self {
        Self {
            take: Some(n),
            ..Self::default()
        }
    }
}

/// Result of a walk
#[derive(Debug, Clone)]
pub struct WalkSummary {
    /// Keys produced during this walk
    pub produced: usize,

    /// No keys remain
    pub exhausted: bool,

    /// Nodes touched
    pub nodes_visited: usize,

    /// Position after the walk
    pub checkpoint: Checkpoint,

    /// Frame usage (if enabled)
    pub space_profile: Option<SpaceProfile>,
}

/// Errors that can occur during a walk
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// Checkpoint does not fit the tree
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

impl<'a, K> Walker<'a, K> {
    /// Create new walker
    pub fn new(root: Option<&'a TreeNode<K>>, config: WalkConfig) -> Self {
        Self { root, config }
    }

    /// Feed keys to `visit` in in-order
    ///
    /// Keys are handed over one at a time; nothing is collected.
    pub fn run<F>(&self, mut visit: F) -> Result<WalkSummary, WalkError>
    where
        F: FnMut(&'a K),
    {
        let mut cursor = match &self.config.resume_from {
            Some(checkpoint) => checkpoint.resume(self.root)?,
            None => enumerate(self.root),
        };
        let start = cursor.yielded();
        let limit = self.config.take.unwrap_or(usize::MAX);

        for key in cursor.by_ref().take(limit) {
            visit(key);
        }

        let produced = cursor.yielded() - start;
        let exhausted = cursor.is_exhausted();
        let profile = cursor.profile();

        if self.config.verbose {
            debug!(produced, exhausted, "{}", profile.report());
        }

        let space_profile = self.config.profile_space.then_some(profile);

        info!(produced, exhausted, "walk finished");

        Ok(WalkSummary {
            produced,
            exhausted,
            nodes_visited: cursor.nodes_visited(),
            checkpoint: cursor.checkpoint(),
            space_profile,
        })
    }
}
