//! Performance benchmarks for shelf-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use shelf_engine::{catalog, filter, CollectionSchema, FilterCriteria, ResourceStore};

const CATEGORIES: [&str; 4] = ["electronics", "furniture", "appliances", "wearables"];

fn populated_products(size: usize) -> ResourceStore {
    let mut store = ResourceStore::new(CollectionSchema::products());
    for i in 0..size {
        let _ = store.create(json!({
            "name": format!("Product {}", i),
            "price": (i % 1000) as f64 + 0.99,
            "category": CATEGORIES[i % CATEGORIES.len()],
        }));
    }
    store
}

fn bench_store_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    group.bench_function("create", |b| {
        let mut store = catalog::task_store();
        b.iter(|| store.create(black_box(json!({"name": "Buy milk"}))))
    });

    group.bench_function("find", |b| {
        let mut store = catalog::task_store();
        for i in 0..1000 {
            let _ = store.create(json!({"name": format!("Task {}", i)}));
        }

        b.iter(|| store.find(black_box(500)))
    });

    group.bench_function("list", |b| {
        let store = populated_products(1000);
        b.iter(|| store.list())
    });

    group.bench_function("create_delete", |b| {
        let mut store = catalog::task_store();
        b.iter(|| {
            let record = store.create(json!({"name": "Temp"})).unwrap();
            store.delete(black_box(record.id))
        })
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let criteria = FilterCriteria::new()
        .with_category("electronics")
        .with_min_price(100.0)
        .with_max_price(800.0)
        .with_name("product 1");

    for size in [100, 1000, 10_000].iter() {
        let records = populated_products(*size).list();

        group.bench_with_input(BenchmarkId::new("all_criteria", size), &records, |b, records| {
            b.iter(|| filter::apply(black_box(records), black_box(&criteria)))
        });

        group.bench_with_input(BenchmarkId::new("no_criteria", size), &records, |b, records| {
            b.iter(|| filter::apply(black_box(records), black_box(&FilterCriteria::new())))
        });
    }

    group.bench_function("from_params", |b| {
        b.iter(|| {
            FilterCriteria::from_params(
                black_box(Some("electronics")),
                black_box(Some("500")),
                black_box(Some("1000")),
                black_box(Some("pro")),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_store_operations, bench_filter);
criterion_main!(benches);
