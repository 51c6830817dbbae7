// Test-only helpers for `energyroute-cli` unit tests
#![allow(dead_code)]

use energyroute_lib::{
    plan_route, EnergyLevels, Network, RouteRequest, RouteSummary, WeightMatrix,
};

/// Three-node network where `0 -> 1 -> 2` (weight 2) beats the direct edge.
pub fn triangle_network(energy: Vec<i64>) -> Network {
    let weights = WeightMatrix::from_rows(vec![
        vec![0.0, 1.0, 5.0],
        vec![1.0, 0.0, 1.0],
        vec![5.0, 1.0, 0.0],
    ])
    .expect("valid matrix");
    Network::new(weights, EnergyLevels::new(energy)).expect("energy matches matrix")
}

/// Summary of the ungated `0 -> 2` route on the triangle network.
pub fn triangle_summary() -> RouteSummary {
    let network = triangle_network(vec![50, 50, 50]);
    let plan = plan_route(&network, &RouteRequest::new(0, 2)).expect("route plans");
    RouteSummary::from_plan(&network, &plan)
}

/// Summary of a `0 -> 2` request whose end node is gated out.
pub fn gated_summary() -> RouteSummary {
    let network = triangle_network(vec![50, 50, 5]);
    let plan = plan_route(&network, &RouteRequest::new(0, 2).with_threshold(10))
        .expect("indices are valid");
    RouteSummary::from_plan(&network, &plan)
}
