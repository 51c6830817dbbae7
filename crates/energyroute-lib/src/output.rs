use std::fmt::Write;

use serde::Serialize;

use crate::network::{Energy, Network, NodeId};
use crate::routing::RoutePlan;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub node: NodeId,
    pub energy: Energy,
    /// Weight of the edge used to arrive at this node; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_weight: Option<f64>,
    pub cumulative_weight: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: NodeId,
    pub end: NodeId,
    pub threshold: Energy,
    pub found: bool,
    pub hops: usize,
    pub total_weight: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary annotated with energies and weights.
    ///
    /// `plan` must have been produced for `network`.
    pub fn from_plan(network: &Network, plan: &RoutePlan) -> Self {
        let weights = network.weights();
        let mut cumulative = 0.0;
        let mut previous: Option<NodeId> = None;

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &node)| {
                let hop_weight = previous.map(|from| weights.weight(from, node));
                cumulative += hop_weight.unwrap_or(0.0);
                previous = Some(node);
                RouteStep {
                    index,
                    node,
                    energy: network.energy().get(node).unwrap_or_default(),
                    hop_weight,
                    cumulative_weight: cumulative,
                }
            })
            .collect::<Vec<_>>();

        Self {
            start: plan.start,
            end: plan.end,
            threshold: plan.threshold,
            found: plan.is_found(),
            hops: plan.hop_count(),
            total_weight: plan.total_weight.unwrap_or(0.0),
            steps,
        }
    }

    /// Render the route as a single `Optimal path: 0 -> 1 -> 2` line, or the
    /// no-path message when nothing satisfied the energy gate.
    pub fn render_compact(&self) -> String {
        if !self.found {
            return "No valid path found.\n".to_string();
        }
        let joined = self
            .steps
            .iter()
            .map(|step| step.node.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("Optimal path: {joined}\n")
    }
}

/// Snapshot of a generated network for display or serialisation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatrixReport {
    pub node_count: usize,
    pub weights: Vec<Vec<f64>>,
    pub energy: Vec<Energy>,
}

impl MatrixReport {
    pub fn from_network(network: &Network) -> Self {
        Self {
            node_count: network.node_count(),
            weights: network.weights().rows().map(<[f64]>::to_vec).collect(),
            energy: network.energy().as_slice().to_vec(),
        }
    }

    /// Render every weight as `W[i][j] = x.xx`, one matrix row per line,
    /// followed by the energy of each node.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Weights:");
        for (row, values) in self.weights.iter().enumerate() {
            let line = values
                .iter()
                .enumerate()
                .map(|(column, value)| format!("W[{row}][{column}] = {value:.2}"))
                .collect::<Vec<_>>()
                .join("  ");
            let _ = writeln!(buffer, "{line}");
        }
        let _ = writeln!(buffer, "\nEnergy:");
        for (node, energy) in self.energy.iter().enumerate() {
            let _ = writeln!(buffer, "Node {node}: {energy}");
        }
        buffer
    }
}
