use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use libintsched_cli_r::config::BenchConfig;
use libintsched_cli_r::generator::{generate_intervals, rng_from_config};
use libintsched_cli_r::math_support::Interval;
use libintsched_cli_r::selector::{SelectorTrait, Strategy};

struct Workload {
    name: &'static str,
    intervals: Vec<Interval>,
}

fn build_workload(name: &'static str, count: usize, start_hi: f64, length_hi: f64) -> Workload {
    let config = BenchConfig {
        count,
        start_range: (1.0, start_hi),
        length_range: (1.0, length_hi),
        seed: Some(0x5eed),
    };
    let intervals = generate_intervals(&config, &mut rng_from_config(&config)).expect("valid bench config");
    Workload { name, intervals }
}

fn build_workloads() -> Vec<Workload> {
    vec![
        // the command line default: sparse, short intervals
        build_workload("sparse_10k", 10_000, 1_000_000.0, 1000.0),
        // heavy overlap keeps the longest-first pick list short but the scan long
        build_workload("dense_10k", 10_000, 10_000.0, 1000.0),
        build_workload("sparse_50k", 50_000, 5_000_000.0, 1000.0),
    ]
}

fn bench_selectors(c: &mut Criterion, show_intervals: bool) {
    let workloads = build_workloads();
    let group_name = if show_intervals { "selectors/with_subset" } else { "selectors/total_only" };
    let mut group = c.benchmark_group(group_name);
    group.sample_size(20);

    for workload in &workloads {
        group.throughput(Throughput::Elements(workload.intervals.len() as u64));
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), workload.name),
                &workload.intervals,
                |b, intervals| {
                    b.iter(|| {
                        let selection = strategy.select(black_box(intervals), show_intervals);
                        black_box(selection.total);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_total_only(c: &mut Criterion) {
    bench_selectors(c, false);
}

fn bench_with_subset(c: &mut Criterion) {
    bench_selectors(c, true);
}

criterion_group!(benches, bench_total_only, bench_with_subset);
criterion_main!(benches);
