//! Traversal benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inorder_walk::*;

fn benchmark_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("inorder");

    for n in [1_000usize, 100_000] {
        let keys: Vec<usize> = (0..n).collect();
        let balanced_root = balanced(&keys);
        let chain_root = right_chain(0..n);

        group.bench_with_input(BenchmarkId::new("balanced", n), &balanced_root, |b, root| {
            b.iter(|| enumerate(root.as_ref()).fold(0usize, |acc, key| acc ^ black_box(*key)));
        });
        group.bench_with_input(BenchmarkId::new("right_chain", n), &chain_root, |b, root| {
            b.iter(|| enumerate(root.as_ref()).fold(0usize, |acc, key| acc ^ black_box(*key)));
        });
    }

    group.finish();
}

fn benchmark_first_key(c: &mut Criterion) {
    let keys: Vec<usize> = (0..100_000).collect();
    let root = balanced(&keys);

    c.bench_function("first_key_balanced_100000", |b| {
        b.iter(|| black_box(enumerate(root.as_ref()).next().copied()));
    });
}

criterion_group!(benches, benchmark_traversal, benchmark_first_key);
criterion_main!(benches);
