//! Benchmarks for neocat catalog operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use neocat::{Asteroid, Catalog};

fn record(i: usize) -> Asteroid {
    Asteroid {
        date: "2025-12-05".to_string(),
        name: format!("neo-{:06}", i),
        id: i as i64,
        is_hazardous: i % 7 == 0,
        absolute_magnitude_h: 20.0,
        diameter_min_m: 100.0,
        diameter_max_m: 200.0,
        miss_distance_km: 1_000_000.0,
        velocity_km_s: 10.0,
    }
}

fn populated(n: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..n {
        catalog.push(record(i));
    }
    catalog
}

fn catalog_benchmarks(c: &mut Criterion) {
    c.bench_function("push 10k", |b| {
        b.iter(|| {
            let mut catalog = Catalog::new();
            for i in 0..10_000 {
                catalog.push(black_box(record(i)));
            }
            catalog
        })
    });

    let catalog = populated(10_000);
    c.bench_function("search 10k", |b| {
        b.iter(|| catalog.search(black_box("neo-0042")).count())
    });

    c.bench_function("next_id 10k", |b| b.iter(|| black_box(&catalog).next_id()));
}

criterion_group!(benches, catalog_benchmarks);
criterion_main!(benches);
