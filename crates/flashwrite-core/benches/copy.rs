//! Benchmarks for the flashwrite-core copy engine.
//!
//! Measures plain copy throughput against the optimized compare-then-write
//! path on a matching and a non-matching destination.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use flashwrite_core::BlockCopier;
use flashwrite_core::test_support::MemTarget;
use flashwrite_core::test_support::SliceSource;
use flashwrite_core::test_support::patterned_bytes;

const PAYLOAD_SIZE: usize = 8 * 1024 * 1024;
const BLOCK_SIZE: usize = 1024 * 1024;

fn bench_plain_copy(c: &mut Criterion) {
    let data = patterned_bytes(PAYLOAD_SIZE, 0xfeed);

    let mut group = c.benchmark_group("plain_copy");
    group.throughput(Throughput::Bytes(PAYLOAD_SIZE as u64));
    group.bench_function(BenchmarkId::from_parameter("8MiB"), |b| {
        b.iter(|| {
            let mut source = SliceSource::new(data.clone());
            let mut target = MemTarget::new();
            let mut copier = BlockCopier::with_limits(BLOCK_SIZE, 0);
            copier.copy(&mut source, &mut target, false).unwrap();
            target
        });
    });
    group.finish();
}

fn bench_optimized_copy(c: &mut Criterion) {
    let data = patterned_bytes(PAYLOAD_SIZE, 0xbeef);

    let mut group = c.benchmark_group("optimized_copy");
    group.throughput(Throughput::Bytes(PAYLOAD_SIZE as u64));

    // Destination already matches: every block is skipped.
    group.bench_function(BenchmarkId::from_parameter("all_matching"), |b| {
        b.iter_batched(
            || MemTarget::with_content(data.clone()),
            |mut target| {
                let mut source = SliceSource::new(data.clone());
                let mut copier = BlockCopier::with_limits(BLOCK_SIZE, 0);
                copier.copy(&mut source, &mut target, true).unwrap();
                target
            },
            criterion::BatchSize::LargeInput,
        );
    });

    // Empty destination: the compare read comes up short on every block
    // and the full payload is written anyway.
    group.bench_function(BenchmarkId::from_parameter("none_matching"), |b| {
        b.iter(|| {
            let mut source = SliceSource::new(data.clone());
            let mut target = MemTarget::new();
            let mut copier = BlockCopier::with_limits(BLOCK_SIZE, 0);
            copier.copy(&mut source, &mut target, true).unwrap();
            target
        });
    });

    group.finish();
}

criterion_group!(benches, bench_plain_copy, bench_optimized_copy);
criterion_main!(benches);
