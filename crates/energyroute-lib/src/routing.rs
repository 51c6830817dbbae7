use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::network::{Energy, Network, NodeId};
use crate::path::{find_path, path_weight, PathConstraints};

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: NodeId,
    pub end: NodeId,
    pub constraints: PathConstraints,
}

impl RouteRequest {
    /// Request a route with the default threshold of 0.
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            constraints: PathConstraints::default(),
        }
    }

    /// Gate out nodes whose energy is at or below `threshold`.
    pub fn with_threshold(mut self, threshold: Energy) -> Self {
        self.constraints.threshold = threshold;
        self
    }
}

/// Planned route returned by the library.
///
/// `steps` is empty when no path satisfies the energy gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub end: NodeId,
    pub threshold: Energy,
    pub steps: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
}

impl RoutePlan {
    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the cheapest energy-gated route through `network`.
///
/// Fails fast with [`Error::InvalidNodeIndex`](crate::Error::InvalidNodeIndex)
/// when either endpoint is out of range. An unreachable end is reported through
/// an empty [`RoutePlan`], not an error.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let start = network.check_node(request.start)?;
    let end = network.check_node(request.end)?;
    let threshold = request.constraints.threshold;

    debug!(start, end, threshold, "planning route");
    let steps = find_path(
        network.weights(),
        network.energy(),
        start,
        end,
        &request.constraints,
    );
    let total_weight = (!steps.is_empty()).then(|| path_weight(network.weights(), &steps));

    match total_weight {
        Some(weight) => debug!(hops = steps.len() - 1, weight, "route found"),
        None => debug!(start, end, threshold, "no route satisfies the energy gate"),
    }

    Ok(RoutePlan {
        start,
        end,
        threshold,
        steps,
        total_weight,
    })
}
