use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::trace;

use crate::network::{Energy, EnergyLevels, NodeId, WeightMatrix};

/// Constraints applied during pathfinding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PathConstraints {
    /// Nodes whose energy is at or below this value cannot be entered.
    pub threshold: Energy,
}

impl PathConstraints {
    pub fn with_threshold(threshold: Energy) -> Self {
        Self { threshold }
    }

    /// Whether `target` may be entered as a hop. Nodes without an energy entry
    /// are never enterable.
    fn allows(&self, energy: &EnergyLevels, target: NodeId) -> bool {
        energy
            .get(target)
            .is_some_and(|level| level > self.threshold)
    }
}

/// Find the minimum-weight path from `start` to `end` that never enters a node
/// gated out by `constraints`.
///
/// The start node is exempt from the energy gate. A path from a node to itself
/// is the single-element path `[start]`. Returns an empty vector when `end` is
/// unreachable, including when either index is outside the matrix; use
/// [`plan_route`](crate::plan_route) to have out-of-range indices rejected.
pub fn find_path(
    weights: &WeightMatrix,
    energy: &EnergyLevels,
    start: NodeId,
    end: NodeId,
    constraints: &PathConstraints,
) -> Vec<NodeId> {
    let node_count = weights.size();
    if start >= node_count || end >= node_count {
        return Vec::new();
    }

    let mut best = vec![f64::INFINITY; node_count];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; node_count];
    // Min-heap keyed by distance, then by lower node index.
    let mut queue: BinaryHeap<Reverse<(FloatOrd, NodeId)>> = BinaryHeap::new();
    let mut pops = 0usize;

    best[start] = 0.0;
    queue.push(Reverse((FloatOrd(0.0), start)));

    while let Some(Reverse((FloatOrd(distance), current))) = queue.pop() {
        pops += 1;
        let current_distance = best[current];
        if distance > current_distance {
            continue;
        }

        if current == end {
            break;
        }

        for (next, &weight) in weights.row(current).iter().enumerate() {
            if next == current || !constraints.allows(energy, next) {
                continue;
            }
            if weight <= 0.0 {
                continue;
            }

            let candidate = current_distance + weight;
            if candidate < best[next] {
                best[next] = candidate;
                predecessor[next] = Some(current);
                queue.push(Reverse((FloatOrd(candidate), next)));
            }
        }
    }

    trace!(start, end, pops, "relaxation finished");
    reconstruct_path(&predecessor, start, end)
}

/// Sum of the edge weights along `path`. Empty and single-node paths weigh 0.
pub fn path_weight(weights: &WeightMatrix, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|hop| weights.weight(hop[0], hop[1]))
        .sum()
}

fn reconstruct_path(predecessor: &[Option<NodeId>], start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = predecessor[node];
    }
    path.reverse();

    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}

/// Total order over distances so they can key a [`BinaryHeap`].
#[derive(Copy, Clone, Debug)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
