use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;

use sparsenum::{Element, SparseVector};

fn generate_vector(n: usize, max_index: i64, seed: u64) -> SparseVector {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut v = SparseVector::new();
    while v.len() < n {
        let index = rng.random_range(1..=max_index);
        let value = rng.random::<f64>() + 0.5;
        // duplicates are simply skipped
        let _ = v.insert(Element::new(index, value).unwrap());
    }
    v
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in [100usize, 1_000, 10_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let elements: Vec<Element> = (0..n)
            .map(|_| Element::new(rng.random_range(1..=i64::MAX), 1.0).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::new("random_order", n), &elements, |b, elements| {
            b.iter(|| {
                let mut v = SparseVector::new();
                for e in elements {
                    let _ = v.insert(*e);
                }
                black_box(v)
            });
        });
    }

    group.finish();
}

fn benchmark_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    // (nnz of a, nnz of b, dimension)
    let test_cases = vec![
        (1_000, 1_000, 10_000),
        (10_000, 10_000, 100_000),
        (100, 100_000, 1_000_000),
    ];

    for (m, n, dim) in test_cases {
        let a = generate_vector(m, dim, 1);
        let b = generate_vector(n, dim, 2);

        group.bench_with_input(
            BenchmarkId::new("merge", format!("m={}_n={}_dim={}", m, n, dim)),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.dot(b)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_dot);
criterion_main!(benches);
