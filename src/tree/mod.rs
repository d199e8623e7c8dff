//! Binary tree and lazy in-order traversal
//!
//! Key idea: the recursive traversal
//! `walk(n) = walk(n.left) ++ [n.key] ++ walk(n.right)`
//! suspends after every key. Its call stack becomes an explicit stack of
//! pending frames, so a cursor holds O(h) state and never the full
//! sequence.

mod build;
mod checkpoint;
mod inorder;
mod node;

pub use build::{balanced, left_chain, right_chain, sample_tree, SearchTree};
pub use checkpoint::{Checkpoint, CheckpointError, Direction};
pub use inorder::{enumerate, Inorder};
pub use node::{Link, TreeNode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restartable() {
        let root = sample_tree();
        let first: Vec<_> = enumerate(Some(&root)).collect();
        let second: Vec<_> = enumerate(Some(&root)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interleaved_cursors_independent() {
        let root = sample_tree();
        let mut a = root.iter();
        let mut b = root.iter();

        assert_eq!(a.next(), Some(&3));
        assert_eq!(a.next(), Some(&5));
        assert_eq!(b.next(), Some(&3));
        assert_eq!(a.next(), Some(&7));
        assert_eq!(b.next(), Some(&5));
        assert_eq!(a.yielded(), 3);
        assert_eq!(b.yielded(), 2);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let root = sample_tree();
        let mut sum = 0;
        for key in &root {
            sum += key;
        }
        assert_eq!(sum, 40);
    }
}
