//! Benchmarks for complaintdesk-core derived views

#![allow(missing_docs, clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::NaiveDate;
use complaintdesk_core::{
    ColorScale, Complaint, ComplaintStatus, DashboardStats, Heatmap, filter_complaints,
    month_labels,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

const USERS: [&str; 6] = [
    "Alice Johnson",
    "Bob Smith",
    "Carol White",
    "David Brown",
    "Emma Davis",
    "Frank Miller",
];

const CATEGORIES: [&str; 5] = ["Noise", "Garbage", "Pothole", "Street Light", "Parking"];

/// Synthetic record set of `n` complaints, every third resolved
fn records(n: u32) -> Vec<Complaint> {
    (0..n)
        .map(|id| {
            let user = USERS[id as usize % USERS.len()];
            let category = CATEGORIES[id as usize % CATEGORIES.len()];
            let status = if id % 3 == 0 {
                ComplaintStatus::Resolved
            } else {
                ComplaintStatus::Pending
            };
            Complaint::new(id, user, category, 40.7, -74.0).with_status(status)
        })
        .collect()
}

/// Benchmark substring filtering over growing record sets
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_complaints");

    for size in [12_u32, 1_000, 10_000] {
        let data = records(size);
        group.throughput(Throughput::Elements(u64::from(size)));

        group.bench_with_input(BenchmarkId::new("empty_query", size), &data, |b, data| {
            b.iter(|| filter_complaints(black_box(data), ""));
        });
        group.bench_with_input(BenchmarkId::new("user_match", size), &data, |b, data| {
            b.iter(|| filter_complaints(black_box(data), "alice"));
        });
        group.bench_with_input(BenchmarkId::new("no_match", size), &data, |b, data| {
            b.iter(|| filter_complaints(black_box(data), "zzz"));
        });
    }

    group.finish();
}

/// Benchmark summary counts
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_stats");

    for size in [12_u32, 1_000, 10_000] {
        let data = records(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| DashboardStats::from_complaints(black_box(data)));
        });
    }

    group.finish();
}

/// Benchmark heatmap generation and rendering helpers
fn bench_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap");
    let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();

    group.bench_function("generate", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| Heatmap::generate(black_box(today), &mut rng));
    });

    group.bench_function("month_labels", |b| {
        b.iter(|| month_labels(black_box(today)));
    });

    let scale = ColorScale::activity();
    group.bench_function("color_scale", |b| {
        b.iter(|| {
            (0..=50)
                .map(|i| scale.color(black_box(f64::from(i) / 10.0)))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_stats, bench_heatmap);
criterion_main!(benches);
