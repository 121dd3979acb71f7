use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stocklist_core::RecordId;
use stocklist_inventory::{
    InventoryRecord, RecordDraft, RecordStore, SortDirection, categories, project,
};

const CATEGORIES: [&str; 4] = ["Electronics", "Furniture", "Tools", "Stationery"];

fn build_store(count: usize) -> RecordStore {
    RecordStore::with_records((0..count).map(|i| {
        InventoryRecord::new(
            RecordId::new(),
            RecordDraft::new(
                format!("item-{i}"),
                CATEGORIES[i % CATEGORIES.len()],
                ((i * 7919) % 500) as i64,
                (i % 1000) as f64 + 0.99,
                "",
            ),
        )
    }))
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");

    for count in [10usize, 100, 1000, 10000].iter() {
        let store = build_store(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered_desc", count), count, |b, _| {
            b.iter(|| project(black_box(store.list()), None, SortDirection::Descending))
        });

        group.bench_with_input(BenchmarkId::new("filtered_asc", count), count, |b, _| {
            b.iter(|| {
                project(
                    black_box(store.list()),
                    Some("Furniture"),
                    SortDirection::Ascending,
                )
            })
        });
    }

    group.finish();
}

fn bench_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("categories");

    for count in [100usize, 10000].iter() {
        let store = build_store(*count);
        group.bench_with_input(BenchmarkId::new("distinct", count), count, |b, _| {
            b.iter(|| categories(black_box(store.list())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_project, bench_categories);
criterion_main!(benches);
