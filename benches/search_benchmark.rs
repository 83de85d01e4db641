//! Criterion benchmarks for repository lookups and facade queries
//!
//! Compares identity and reverse-index lookups against linear field scans,
//! and measures the cost enrichment adds on top of a raw lookup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zensearch::models::{Record, Value};
use zensearch::repository::{NumericKey, Repository};
use zensearch::SearchService;

const ORGANIZATIONS: i64 = 100;

fn users(count: i64) -> Vec<Record> {
    (0..count)
        .map(|id| {
            Record::new()
                .with("_id", id)
                .with("name", format!("user {}", id))
                .with("active", id % 2 == 0)
                .with("organization_id", id % ORGANIZATIONS)
                .with("tags", vec![Value::from("Springville"), Value::from(format!("tag {}", id % 10))])
        })
        .collect()
}

fn organizations() -> Vec<Record> {
    (0..ORGANIZATIONS)
        .map(|id| Record::new().with("_id", id).with("name", format!("org {}", id)))
        .collect()
}

fn tickets(count: i64, users: i64) -> Vec<Record> {
    (0..count)
        .map(|n| {
            Record::new()
                .with("_id", format!("ticket-{}", n))
                .with("status", if n % 3 == 0 { "open" } else { "closed" })
                .with("submitter_id", n % users)
                .with("assignee_id", (n + 1) % users)
                .with("organization_id", n % ORGANIZATIONS)
        })
        .collect()
}

fn service(user_count: i64) -> SearchService {
    SearchService::new(
        Repository::users(users(user_count)).unwrap(),
        Repository::organizations(organizations()).unwrap(),
        Repository::tickets(tickets(user_count * 2, user_count)).unwrap(),
    )
}

/// Benchmark indexed lookups against scans over the same repository
fn bench_repository_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_lookup");

    for size in [1_000i64, 10_000] {
        let repository = Repository::users(users(size)).unwrap();
        let middle = Value::from(size / 2);
        let name = Value::from(format!("user {}", size / 2));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("by_id", size), &middle, |b, term| {
            b.iter(|| repository.find_by_field(black_box("_id"), black_box(term)));
        });

        group.bench_with_input(BenchmarkId::new("by_foreign_key", size), &size, |b, _| {
            b.iter(|| repository.find_by_foreign_key("organization_id", black_box(NumericKey::from(7.0))));
        });

        group.bench_with_input(BenchmarkId::new("scan_string", size), &name, |b, term| {
            b.iter(|| repository.find_by_field(black_box("name"), black_box(term)));
        });

        group.bench_with_input(
            BenchmarkId::new("scan_list", size),
            &Value::from("Springville,tag 3"),
            |b, term| {
                b.iter(|| repository.find_by_field(black_box("tags"), black_box(term)));
            },
        );
    }

    group.finish();
}

/// Benchmark full facade queries, including enrichment
fn bench_enriched_search(c: &mut Criterion) {
    let service = service(5_000);
    let mut group = c.benchmark_group("enriched_search");

    group.bench_function("user_by_id", |b| {
        b.iter(|| service.find_users(black_box("_id"), black_box(&Value::from("42"))));
    });

    group.bench_function("organization_by_id", |b| {
        b.iter(|| service.find_orgs(black_box("_id"), black_box(&Value::from(7))));
    });

    group.bench_function("tickets_by_status", |b| {
        b.iter(|| service.find_tickets(black_box("status"), black_box(&Value::from("open"))));
    });

    group.finish();
}

/// Benchmark repository construction
fn bench_build(c: &mut Criterion) {
    let records = tickets(10_000, 1_000);

    c.bench_function("build_ticket_repository", |b| {
        b.iter(|| Repository::tickets(black_box(records.clone())).unwrap());
    });
}

criterion_group!(benches, bench_repository_lookup, bench_enriched_search, bench_build);
criterion_main!(benches);
