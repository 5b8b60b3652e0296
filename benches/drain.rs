use std::{collections::BTreeSet, hint::black_box};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use treebench::{BstSet, RedBlackSet, dataset};

fn drain_bst(data: &[i32]) {
    let mut set = BstSet::new();
    for &key in data {
        set.insert(key);
    }
    for key in data {
        set.remove(key);
    }
}

fn drain_labeled(data: &[i32]) {
    let mut set = RedBlackSet::new();
    for &key in data {
        set.insert(key);
    }
    for key in data {
        set.remove(key);
    }
}

fn drain_std(data: &[i32]) {
    let mut set = BTreeSet::new();
    for &key in data {
        set.insert(key);
    }
    for key in data {
        set.remove(key);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Drain");
    for n in [1_000, 10_000] {
        let data = dataset::permutation(n, 0);
        group.bench_with_input(BenchmarkId::new("BstSet", n), &data, |b, data| {
            b.iter(|| drain_bst(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("RedBlackSet", n), &data, |b, data| {
            b.iter(|| drain_labeled(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", n), &data, |b, data| {
            b.iter(|| drain_std(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
