use criterion::{criterion_group, criterion_main, Criterion};
use energyroute_lib::{build_network, find_path, Network, NetworkConfig, PathConstraints};
use once_cell::sync::Lazy;
use std::hint::black_box;

static NETWORK: Lazy<Network> =
    Lazy::new(|| build_network(&NetworkConfig::with_nodes(200)).expect("network builds"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*NETWORK;

    c.bench_function("find_path_200_ungated", |b| {
        let constraints = PathConstraints::with_threshold(0);
        b.iter(|| {
            let path = find_path(network.weights(), network.energy(), 0, 199, &constraints);
            black_box(path.len())
        });
    });

    c.bench_function("find_path_200_gated", |b| {
        let constraints = PathConstraints::with_threshold(60);
        b.iter(|| {
            let path = find_path(network.weights(), network.energy(), 0, 199, &constraints);
            black_box(path.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
