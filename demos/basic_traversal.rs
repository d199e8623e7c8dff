use anyhow::{Context, Result};
use inorder_walk::{enumerate, sample_tree};

fn main() -> Result<()> {
    let root = sample_tree();
    println!("Tree: {}", root);

    let keys: Vec<String> = enumerate(Some(&root)).map(|key| key.to_string()).collect();
    println!("In-order traversal: {}", keys.join(" "));

    println!("\nLaziness:");
    let mut cursor = root.iter();
    let first = cursor.next().context("tree has a first key")?;
    println!("first key {} after visiting {} nodes", first, cursor.nodes_visited());
    let second = cursor.next().context("tree has a second key")?;
    println!("second key {} after visiting {} nodes", second, cursor.nodes_visited());

    let checkpoint = cursor.checkpoint();
    println!("checkpoint {}", checkpoint);
    let rest: Vec<String> = checkpoint
        .resume(Some(&root))
        .context("resume on the same tree")?
        .map(|key| key.to_string())
        .collect();
    println!("resumed: {}", rest.join(" "));

    Ok(())
}
