//! Basic benchmarks for the `resource_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::num::NonZero;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use new_zealand::nz;
use resource_pool::{ReleasePolicy, ResourcePool};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

const CAPACITY: NonZero<usize> = nz!(64);

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("rp_basic");

    let allocs_op = allocs.operation("build");
    group.bench_function("build", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(ResourcePool::new(CAPACITY)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("acquire_release_strict");
    group.bench_function("acquire_release_strict", |b| {
        let mut pool = ResourcePool::new(CAPACITY);

        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let resource = black_box(pool.acquire()).unwrap();
                _ = black_box(pool.release(resource));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("acquire_release_lenient");
    group.bench_function("acquire_release_lenient", |b| {
        let mut pool = ResourcePool::builder()
            .capacity(CAPACITY)
            .release_policy(ReleasePolicy::Lenient)
            .build();

        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let resource = black_box(pool.acquire()).unwrap();
                _ = black_box(pool.release(resource));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("acquire_exhausted");
    group.bench_function("acquire_exhausted", |b| {
        b.iter_custom(|iters| {
            let mut pool = ResourcePool::new(nz!(1));
            let _held = pool.acquire();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(pool.acquire());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("drain_and_refill");
    group.bench_function("drain_and_refill", |b| {
        b.iter_custom(|iters| {
            let mut pools = iter::repeat_with(|| ResourcePool::new(CAPACITY))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for pool in &mut pools {
                let held = iter::from_fn(|| pool.acquire()).collect::<Vec<_>>();

                for resource in held {
                    _ = black_box(pool.release(resource));
                }
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
