//! Benchmarks for the filter and sort engine.
//!
//! Records are generated with `fake` so the collections are far larger than
//! the bundled sample data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fake::{Fake, Faker};
use freelancehub_admin::marketplace::models::{Job, JobStatus, UserEarnings};
use freelancehub_admin::marketplace::{Query, Selection, TextFilter};

fn jobs(count: usize) -> Vec<Job> {
    (0..count).map(|_| Faker.fake()).collect()
}

fn earnings(count: usize) -> Vec<UserEarnings> {
    (0..count).map(|_| Faker.fake()).collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for count in [100, 1_000, 10_000] {
        let records = jobs(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| Query::<Job>::new(black_box("an")).apply(records).len())
        });
    }
    group.finish();
}

fn bench_combined_filters(c: &mut Criterion) {
    let records = jobs(10_000);
    let category = TextFilter::parse("Design");
    c.bench_function("jobs_status_category_search", |b| {
        b.iter(|| {
            Query::new(black_box("e"))
                .select(Selection::Only(JobStatus::Open), |j: &Job| j.status)
                .select_text(&category, |j: &Job| j.category.as_str())
                .apply(&records)
                .len()
        })
    });
}

fn bench_sorted_report(c: &mut Criterion) {
    let records = earnings(10_000);
    c.bench_function("earnings_sorted_by_total", |b| {
        b.iter(|| {
            Query::<UserEarnings>::new("")
                .sort_desc(|u| u.total_earnings)
                .apply(black_box(&records))
                .len()
        })
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_combined_filters,
    bench_sorted_report
);
criterion_main!(benches);
