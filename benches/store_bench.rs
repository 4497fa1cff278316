//! Benchmarks for the lead store
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leadbook::routes::RouteTable;
use leadbook::*;
use tempfile::tempdir;

fn create_test_leads(count: usize) -> Vec<Lead> {
    (0..count)
        .map(|i| {
            Lead::new(i as i64)
                .field("name", format!("Lead {}", i))
                .field("email", format!("lead{}@example.com", i))
                .field("stage", "new")
        })
        .collect()
}

fn seeded_store(count: usize, options: StoreOptions) -> LeadStore<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    let snapshot = serde_json::to_string(&create_test_leads(count)).unwrap();
    storage.set_item(&options.key, &snapshot).unwrap();
    LeadStore::open(storage, options).unwrap()
}

fn bench_write_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_through");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("save_raw_{}", size), |b| {
            let mut store = seeded_store(size, StoreOptions::default());
            b.iter(|| store.save_leads().unwrap())
        });

        group.bench_function(format!("save_dedup_{}", size), |b| {
            let options = StoreOptions::new().persistence(PersistenceMode::Deduplicate);
            let mut store = seeded_store(size, options);
            b.iter(|| store.save_leads().unwrap())
        });

        group.bench_function(format!("update_{}", size), |b| {
            let mut store = seeded_store(size, StoreOptions::default());
            let update = Lead::new((size / 2) as i64).field("stage", "contacted");
            b.iter(|| store.update_lead(black_box(update.clone())).unwrap())
        });
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("load_memory_{}", size), |b| {
            let mut store = seeded_store(size, StoreOptions::default());
            b.iter(|| store.load_leads().unwrap())
        });
    }

    group.bench_function("load_file_1000", |b| {
        let dir = tempdir().unwrap();
        let mut store = LeadStore::new(FileStorage::open(dir.path()).unwrap());
        for lead in create_test_leads(1000) {
            store.add_lead(lead).unwrap();
        }
        b.iter(|| store.load_leads().unwrap())
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let store = seeded_store(10000, StoreOptions::default());
    let last = LeadId::from(9999);

    c.bench_function("get_lead_by_id_last_of_10000", |b| {
        b.iter(|| store.get_lead_by_id(black_box(&last)).is_some())
    });

    let table = RouteTable::standard().unwrap();
    c.bench_function("resolve_customer_route", |b| {
        b.iter(|| table.resolve(black_box("/customers/9999")))
    });
}

criterion_group!(benches, bench_write_through, bench_load, bench_lookup);
criterion_main!(benches);
