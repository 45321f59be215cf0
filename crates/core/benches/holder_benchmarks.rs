use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::sync::Arc;

use singleton_core::{LazySingleton, SingletonRegistry};

static WARM: LazySingleton<Vec<u64>> = LazySingleton::new();

/// Initialized fast path: the gate check plus an `Arc` clone.
fn bench_initialized_get(c: &mut Criterion) {
    WARM.get_or_init(|| (0..64).collect()).unwrap();

    c.bench_function("lazy_singleton/initialized_get", |b| {
        b.iter(|| {
            let handle = WARM.get_or_init(|| unreachable!()).unwrap();
            black_box(handle.len())
        })
    });
}

/// Cold path: a fresh holder per iteration, so every call constructs.
fn bench_first_construction(c: &mut Criterion) {
    c.bench_function("lazy_singleton/first_construction", |b| {
        b.iter(|| {
            let holder: LazySingleton<Vec<u64>> = LazySingleton::new();
            black_box(holder.get_or_init(|| (0..64).collect()).unwrap())
        })
    });
}

/// Registry lookup for an already-registered type.
fn bench_registry_get(c: &mut Criterion) {
    let registry = Arc::new(SingletonRegistry::new());
    registry.get_or_init(|| 42u64).unwrap();

    c.bench_function("singleton_registry/initialized_get", |b| {
        b.iter(|| black_box(registry.get_or_init::<u64, _>(|| unreachable!()).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_initialized_get,
    bench_first_construction,
    bench_registry_get
);
criterion_main!(benches);
