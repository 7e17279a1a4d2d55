//! Benchmarks for the selection filter and chart rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launch_dashboard::charts::{outcome_chart, payload_chart};
use launch_dashboard::dataset::{Dataset, LaunchRecord, Outcome};
use launch_dashboard::filter::{outcome_breakdown, payload_correlation, PayloadRange, SiteFilter};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 137 % 15_600) as f64,
                BOOSTERS[i % BOOSTERS.len()],
                outcome,
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [56, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let site = SiteFilter::parse("KSC LC-39A");
        let range = PayloadRange::new(2000.0, 8000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("outcome_breakdown_all_{}", size), |b| {
            b.iter(|| outcome_breakdown(black_box(&dataset), &SiteFilter::All).outcome_slices())
        });

        group.bench_function(format!("payload_correlation_site_{}", size), |b| {
            b.iter(|| payload_correlation(black_box(&dataset), &site, range).scatter_points())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let dataset = create_test_dataset(56);

    group.bench_function("pie_svg", |b| {
        let result = outcome_breakdown(&dataset, &SiteFilter::All);
        b.iter(|| outcome_chart(black_box(&result)))
    });

    group.bench_function("scatter_svg", |b| {
        let result = payload_correlation(&dataset, &SiteFilter::All, PayloadRange::new(0.0, 10_000.0));
        b.iter(|| payload_chart(black_box(&result)))
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_render);
criterion_main!(benches);
