//! Benchmarks for ArenaKV storage operations

use criterion::{criterion_group, criterion_main, Criterion};

use arenakv::{Config, Store};

fn insert_throughput(c: &mut Criterion) {
    let payload = [0xABu8; 64];

    c.bench_function("insert_64b", |b| {
        b.iter_batched(
            || {
                Store::new(
                    &Config::builder()
                        .initial_arena_size(1 << 16)
                        .initial_index_capacity(1 << 12)
                        .build(),
                )
                .unwrap()
            },
            |mut store| {
                for key in 0..1_000 {
                    store.insert(key, &payload).unwrap();
                }
                store
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn search_throughput(c: &mut Criterion) {
    let payload = [0xABu8; 64];
    let mut store = Store::new(
        &Config::builder()
            .initial_arena_size(1 << 16)
            .initial_index_capacity(1 << 12)
            .build(),
    )
    .unwrap();
    for key in 0..1_000 {
        store.insert(key, &payload).unwrap();
    }

    c.bench_function("search_64b", |b| {
        b.iter(|| {
            for key in 0..1_000 {
                std::hint::black_box(store.search(key).unwrap());
            }
        })
    });
}

criterion_group!(benches, insert_throughput, search_throughput);
criterion_main!(benches);
