//! Benchmarks comparing the sequential and parallel compute modes

use blockscan::{Compaction, PrefixScan};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_prefix_scan(c: &mut Criterion) {
    for &n in &[64usize, 256, 1024] {
        let input = create_input(n);
        let scan = PrefixScan::new(&input, |a, b| a + b);

        c.bench_function(&format!("scan_sequential_{}", n), |bench| {
            bench.iter(|| black_box(scan.compute_sequential()))
        });

        // Includes the per-call worker pool construction and teardown
        c.bench_function(&format!("scan_parallel_{}", n), |bench| {
            bench.iter(|| black_box(scan.compute_parallel()))
        });
    }
}

fn bench_compaction(c: &mut Criterion) {
    let input = create_input(1024);
    let compaction = Compaction::new(&input);

    c.bench_function("compaction_sequential_1024", |bench| {
        bench.iter(|| black_box(compaction.compute_sequential()))
    });

    c.bench_function("compaction_parallel_1024", |bench| {
        bench.iter(|| black_box(compaction.compute_parallel()))
    });
}

/// Builds a deterministic input mixing zero and non-zero elements
fn create_input(n: usize) -> Vec<i64> {
    (0..n)
        .map(|i| if i % 3 == 0 { 0 } else { i as i64 - 7 })
        .collect()
}

criterion_group!(benches, bench_prefix_scan, bench_compaction);
criterion_main!(benches);
