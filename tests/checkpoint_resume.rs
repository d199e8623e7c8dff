//! Checkpoint and resume tests

use inorder_walk::*;
use test_helpers::*;

#[test]
fn test_resume_after_every_prefix() {
    let root = zig_zag();
    let full = collect_keys(root.iter());

    for k in 0..=full.len() {
        let mut cursor = root.iter();
        cursor.by_ref().take(k).for_each(|_| ());
        let checkpoint = cursor.checkpoint();
        assert_eq!(checkpoint.yielded(), k);

        let resumed = checkpoint.resume(Some(&root)).expect("resume on same root");
        assert_eq!(collect_keys(resumed), full[k..].to_vec(), "prefix {}", k);
    }
}

#[test]
fn test_checkpoint_does_not_advance_cursor() {
    let root = sample_tree();
    let mut cursor = root.iter();
    cursor.next();
    let visited = cursor.nodes_visited();

    let _ = cursor.checkpoint();
    assert_eq!(cursor.nodes_visited(), visited);
    assert_eq!(cursor.next(), Some(&5));
}

#[test]
fn test_resumed_cursor_matches_original() {
    let keys: Vec<u32> = (0..300).collect();
    let root = balanced(&keys).unwrap();

    let mut original = root.iter();
    original.by_ref().take(137).for_each(|_| ());
    let resumed = original.checkpoint().resume(Some(&root)).unwrap();

    assert_eq!(resumed.yielded(), 137);
    assert!(original.eq(resumed));
}

#[test]
fn test_checkpoint_depth_bounded_by_height() {
    let root = right_chain(0..1_000u32).unwrap();
    let mut cursor = root.iter();
    cursor.by_ref().take(999).for_each(|_| ());

    let checkpoint = cursor.checkpoint();
    assert_eq!(checkpoint.depth(), 999);
    assert!(checkpoint.directions().all(|d| d == Direction::Right));
    assert_eq!(collect_keys(checkpoint.resume(Some(&root)).unwrap()), vec![999]);
}

#[test]
fn test_resume_against_different_tree() {
    let root = right_chain(0..10u32).unwrap();
    let mut cursor = root.iter();
    cursor.by_ref().take(5).for_each(|_| ());
    let checkpoint = cursor.checkpoint();

    let short = right_chain(0..3u32).unwrap();
    let err = checkpoint.resume(Some(&short)).unwrap_err();
    assert_eq!(err, CheckpointError::PathOutOfBounds { depth: 2 });
    assert_eq!(err.to_string(), "Checkpoint path leaves the tree at depth 2");
}
