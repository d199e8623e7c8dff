use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inorder_walk::{left_chain, right_chain, SearchTree, TreeNode, WalkConfig, Walker};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inorder-walk", about = "Lazy in-order traversal with O(h) cursor state")]
struct Cli {
    /// Log cursor details at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a search tree by inserting keys, then print them in order.
    Walk {
        /// Comma-separated integer keys, inserted left to right.
        #[arg(long, value_delimiter = ',', required = true)]
        keys: Vec<i64>,
        /// Print only the first N keys.
        #[arg(long)]
        take: Option<usize>,
    },
    /// Traverse a degenerate chain and report the peak frame depth.
    Chain {
        /// Number of nodes in the chain.
        #[arg(long, default_value_t = 100_000)]
        len: usize,
        /// Which child links the chain.
        #[arg(long, value_enum, default_value_t = ChainDirection::Right)]
        direction: ChainDirection,
    },
    /// Checkpoint a cursor after K keys, then resume it and print the rest.
    Resume {
        /// Comma-separated integer keys, inserted left to right.
        #[arg(long, value_delimiter = ',', required = true)]
        keys: Vec<i64>,
        /// Keys to produce before checkpointing.
        #[arg(long)]
        after: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ChainDirection {
    Left,
    Right,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Walk { keys, take } => run_walk(keys, take, cli.verbose)?,
        Commands::Chain { len, direction } => run_chain(len, direction, cli.verbose)?,
        Commands::Resume { keys, after } => run_resume(keys, after, cli.verbose)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_walk(keys: Vec<i64>, take: Option<usize>, verbose: bool) -> Result<()> {
    let tree: SearchTree<i64> = keys.into_iter().collect();
    info!(len = tree.len(), height = tree.height(), "built search tree");

    let config = WalkConfig {
        take,
        verbose,
        ..WalkConfig::default()
    };
    let mut line = Vec::new();
    let summary = Walker::new(tree.root(), config)
        .run(|key| line.push(key.to_string()))
        .context("walk failed")?;

    println!("{}", line.join(" "));
    if !summary.exhausted {
        println!("... stopped at {}", summary.checkpoint);
    }

    Ok(())
}

fn run_chain(len: usize, direction: ChainDirection, verbose: bool) -> Result<()> {
    if len == 0 {
        bail!("chain length must be at least 1");
    }

    let root: Option<TreeNode<usize>> = match direction {
        ChainDirection::Right => right_chain(0..len),
        ChainDirection::Left => left_chain(0..len),
    };
    debug!(len, ?direction, "built chain");

    let config = WalkConfig {
        profile_space: true,
        verbose,
        ..WalkConfig::full()
    };
    let mut expected = 0usize;
    let mut in_order = true;
    let summary = Walker::new(root.as_ref(), config)
        .run(|key| {
            in_order &= *key == expected;
            expected += 1;
        })
        .context("chain walk failed")?;

    if !in_order || summary.produced != len {
        bail!(
            "chain traversal out of order: produced {} of {} keys",
            summary.produced,
            len
        );
    }

    let peak = summary
        .space_profile
        .map_or(0, |profile| profile.stack_depth_max);
    println!(
        "chain\tdirection={:?}\tkeys={}\tpeak_depth={}",
        direction, summary.produced, peak
    );

    Ok(())
}

fn run_resume(keys: Vec<i64>, after: usize, verbose: bool) -> Result<()> {
    let tree: SearchTree<i64> = keys.into_iter().collect();

    let config = WalkConfig {
        verbose,
        ..WalkConfig::first(after)
    };
    let mut head = Vec::new();
    let first = Walker::new(tree.root(), config)
        .run(|key| head.push(key.to_string()))
        .context("walk before checkpoint failed")?;

    println!("head\t{}", head.join(" "));
    println!("checkpoint\t{}", first.checkpoint);

    let mut tail = Vec::new();
    let config = WalkConfig {
        resume_from: Some(first.checkpoint),
        verbose,
        ..WalkConfig::full()
    };
    Walker::new(tree.root(), config)
        .run(|key| tail.push(key.to_string()))
        .context("resume from checkpoint failed")?;

    println!("tail\t{}", tail.join(" "));

    Ok(())
}
