use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rust_decimal::Decimal;
use std::sync::Arc;
use stockroom_core::ProductId;
use stockroom_infra::{InMemoryProductRepository, ProductCatalogService, ProductRepository};
use stockroom_products::Product;

fn product(id: i64) -> Product {
    Product::create(
        ProductId::new(id),
        "Bench Item",
        "Benchmark product",
        Decimal::new(1999, 2),
        10,
    )
    .unwrap()
}

fn seeded_repository(size: i64) -> InMemoryProductRepository {
    let repo = InMemoryProductRepository::new();
    for id in 0..size {
        repo.create(product(id)).unwrap();
    }
    repo
}

fn bench_single_operation_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_operation_latency");
    group.sample_size(1000);

    // Benchmark: create through the service (validation + insert-if-absent)
    group.bench_function("service_create_fresh", |b| {
        let service = ProductCatalogService::new(InMemoryProductRepository::new());
        let mut next_id = 0i64;
        b.iter(|| {
            next_id += 1;
            service
                .create_product(
                    ProductId::new(next_id),
                    black_box("Bench Item"),
                    black_box("Benchmark product"),
                    Decimal::new(1999, 2),
                    10,
                )
                .unwrap();
        });
    });

    // Benchmark: replace-if-present on a warm store
    group.bench_function("repository_update_existing", |b| {
        let repo = seeded_repository(1_000);
        let replacement = product(500)
            .update("Renamed", "Benchmark product", Decimal::new(2999, 2), 5)
            .unwrap();
        b.iter(|| {
            repo.update(black_box(replacement.clone())).unwrap();
        });
    });

    group.bench_function("repository_find_by_id", |b| {
        let repo = seeded_repository(1_000);
        b.iter(|| black_box(repo.find_by_id(black_box(ProductId::new(500)))));
    });

    group.finish();
}

fn bench_list_all_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all_snapshot");

    for size in [10i64, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("list_all", size), size, |b, &size| {
            let repo = seeded_repository(size);
            b.iter(|| black_box(repo.list_all()));
        });
    }

    group.finish();
}

fn bench_contended_creates(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_creates");

    for threads in [1i64, 4, 8].iter() {
        group.throughput(Throughput::Elements((*threads * 100) as u64));
        group.bench_with_input(
            BenchmarkId::new("threads", threads),
            threads,
            |b, &threads| {
                b.iter(|| {
                    let repo = Arc::new(InMemoryProductRepository::new());
                    std::thread::scope(|scope| {
                        for worker in 0..threads {
                            let repo = Arc::clone(&repo);
                            scope.spawn(move || {
                                for n in 0..100 {
                                    repo.create(product(worker * 100 + n)).unwrap();
                                }
                            });
                        }
                    });
                    black_box(repo.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_operation_latency,
    bench_list_all_snapshot,
    bench_contended_creates
);
criterion_main!(benches);
