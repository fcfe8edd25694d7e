//! Performance benchmarks for binary search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynamic_array::{binary_search, DynamicArray, ElementKind};
use rand::{Rng, SeedableRng};

fn bench_search_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_hit");

    for size in [100, 10000, 1000000].iter() {
        let arr = DynamicArray::from_values(ElementKind::Integer, 0..*size).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let key = rng.gen_range(0..size);
                black_box(binary_search(&arr, black_box(key)))
            });
        });
    }
    group.finish();
}

fn bench_search_miss(c: &mut Criterion) {
    let arr = DynamicArray::from_values(
        ElementKind::Float,
        (0..10000i32).map(|n| f64::from(n) * 2.0),
    )
    .unwrap();

    c.bench_function("search_miss_10000", |b| {
        b.iter(|| black_box(binary_search(&arr, black_box(4001))));
    });
}

fn bench_search_duplicates(c: &mut Criterion) {
    let arr =
        DynamicArray::from_values(ElementKind::Integer, std::iter::repeat(5).take(10000)).unwrap();

    c.bench_function("search_duplicates_10000", |b| {
        b.iter(|| black_box(binary_search(&arr, black_box(5))));
    });
}

criterion_group!(benches, bench_search_hit, bench_search_miss, bench_search_duplicates);

criterion_main!(benches);
