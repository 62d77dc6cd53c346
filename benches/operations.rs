//! Per-operation benchmarks for the three priority containers
//!
//! For every variant and problem size N the container is prefilled with N
//! distinct random keys drawn from `0..10N`, then `insert`, `maximum`,
//! `extract_max` and `increment_key` are each measured as a single call on a
//! fresh copy of that prefilled container.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench operations
//!
//! # Only some sizes
//! PQ_BENCH_SIZES=100,1000 cargo bench --bench operations
//!
//! # Only one operation
//! cargo bench --bench operations -- increment_key
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use priority_containers::{
    ContainerKind, MaxHeap, PriorityContainer, SortedList, UnsortedList,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const DEFAULT_SIZES: [usize; 8] = [10, 50, 100, 500, 1000, 2500, 5000, 10000];
const SEED: u64 = 0x5eed_cafe;

/// Problem sizes from `PQ_BENCH_SIZES` (comma-separated), or the defaults
fn bench_sizes() -> Vec<usize> {
    if let Ok(raw) = std::env::var("PQ_BENCH_SIZES") {
        let sizes: Vec<usize> = raw
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .filter(|&n| n > 0)
            .collect();
        if !sizes.is_empty() {
            return sizes;
        }
        eprintln!("PQ_BENCH_SIZES={:?} has no usable sizes, using defaults", raw);
    }
    DEFAULT_SIZES.to_vec()
}

/// Builds a container holding `size` distinct keys from `0..10 * size`
fn prefilled<C: PriorityContainer<u64>>(size: usize, rng: &mut StdRng) -> C {
    let mut container = C::new();
    for key in rand::seq::index::sample(rng, size * 10, size) {
        container.insert(key as u64);
    }
    container
}

fn bench_container<C>(c: &mut Criterion, kind: ContainerKind, sizes: &[usize])
where
    C: PriorityContainer<u64> + Clone,
{
    let mut rng = StdRng::seed_from_u64(SEED);

    for &size in sizes {
        let template: C = prefilled(size, &mut rng);
        let new_key = rng.gen_range(0..=size as u64 * 10);
        let index = rng.gen_range(0..size);
        let bump = rng.gen_range(1..=100u64);

        let mut group = c.benchmark_group(format!("insert/{}", kind.slug()));
        group.bench_with_input(BenchmarkId::from_parameter(size), &new_key, |b, &key| {
            b.iter_batched_ref(
                || template.clone(),
                |container| container.insert(black_box(key)),
                BatchSize::LargeInput,
            )
        });
        group.finish();

        let mut group = c.benchmark_group(format!("maximum/{}", kind.slug()));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(template.maximum().map(|key| *key)))
        });
        group.finish();

        let mut group = c.benchmark_group(format!("extract_max/{}", kind.slug()));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_batched_ref(
                || template.clone(),
                |container| black_box(container.extract_max()),
                BatchSize::LargeInput,
            )
        });
        group.finish();

        let mut group = c.benchmark_group(format!("increment_key/{}", kind.slug()));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, &index| {
            b.iter_batched_ref(
                || {
                    let container = template.clone();
                    let old = container.get_value(index).map(|key| *key).unwrap_or(0);
                    (container, old + bump)
                },
                |(container, new_key)| black_box(container.increment_key(index, *new_key)),
                BatchSize::LargeInput,
            )
        });
        group.finish();
    }
}

fn benchmark_max_heap(c: &mut Criterion) {
    bench_container::<MaxHeap<u64>>(c, ContainerKind::MaxHeap, &bench_sizes());
}

fn benchmark_unsorted_list(c: &mut Criterion) {
    bench_container::<UnsortedList<u64>>(c, ContainerKind::UnsortedList, &bench_sizes());
}

fn benchmark_sorted_list(c: &mut Criterion) {
    bench_container::<SortedList<u64>>(c, ContainerKind::SortedList, &bench_sizes());
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = benchmark_max_heap, benchmark_unsorted_list, benchmark_sorted_list
);
criterion_main!(benches);
