#![allow(dead_code)]

use energyroute_lib::{Energy, EnergyLevels, Network, NodeId, WeightMatrix};

/// Three nodes where the two-hop route `0 -> 1 -> 2` (weight 2) beats the
/// direct edge `0 -> 2` (weight 5).
pub fn triangle_weights() -> WeightMatrix {
    WeightMatrix::from_rows(vec![
        vec![0.0, 1.0, 5.0],
        vec![1.0, 0.0, 1.0],
        vec![5.0, 1.0, 0.0],
    ])
    .expect("triangle matrix is valid")
}

pub fn triangle(energy: Vec<Energy>) -> Network {
    Network::new(triangle_weights(), EnergyLevels::new(energy)).expect("energy matches matrix")
}

/// Cheapest weight over every simple path from `start` to `end` that only
/// enters nodes with energy above `threshold` and uses positive-weight edges.
pub fn brute_force_best(
    network: &Network,
    start: NodeId,
    end: NodeId,
    threshold: Energy,
) -> Option<f64> {
    if start == end {
        return Some(0.0);
    }
    let mut visited = vec![false; network.node_count()];
    visited[start] = true;
    let mut best = None;
    explore(network, start, end, threshold, 0.0, &mut visited, &mut best);
    best
}

fn explore(
    network: &Network,
    current: NodeId,
    end: NodeId,
    threshold: Energy,
    cost: f64,
    visited: &mut [bool],
    best: &mut Option<f64>,
) {
    for next in 0..network.node_count() {
        if visited[next] {
            continue;
        }
        let weight = network.weights().weight(current, next);
        let energy = network.energy().get(next).expect("energy per node");
        if weight <= 0.0 || energy <= threshold {
            continue;
        }
        let total = cost + weight;
        if next == end {
            if best.map_or(true, |b| total < b) {
                *best = Some(total);
            }
            continue;
        }
        visited[next] = true;
        explore(network, next, end, threshold, total, visited, best);
        visited[next] = false;
    }
}
