//! Criterion benchmarks for the savings heuristic.
//!
//! Uses synthetic instances with customers scattered on a spiral around
//! the depot.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_savings::constructive::clarke_wright_savings;
use u_savings::distance::DistanceMatrix;
use u_savings::models::{Instance, Node};
use u_savings::multistart::{MultiStartConfig, MultiStartRunner};

fn spiral(n: usize) -> Instance {
    let mut nodes = vec![Node::depot()];
    for k in 1..=n {
        let angle = k as f64 * 2.399963;
        let radius = (k as f64).sqrt() * 4.0;
        let demand = 1.0 + (k % 7) as f64;
        nodes.push(Node::new(k, demand).at(radius * angle.cos(), radius * angle.sin()));
    }
    let dm = DistanceMatrix::from_nodes(&nodes);
    Instance::new(nodes, dm, 40.0).expect("valid instance")
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("clarke_wright_greedy");
    for n in [25, 50, 100] {
        let instance = spiral(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| clarke_wright_savings(black_box(inst)))
        });
    }
    group.finish();
}

fn bench_multistart(c: &mut Criterion) {
    let instance = spiral(50);
    let config = MultiStartConfig::default()
        .without_time_limit()
        .with_max_iterations(20)
        .with_seed(42);
    c.bench_function("multistart_50x20", |b| {
        b.iter(|| MultiStartRunner::run(black_box(&instance), &config))
    });
}

criterion_group!(benches, bench_greedy, bench_multistart);
criterion_main!(benches);
