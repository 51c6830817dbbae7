//! Seeded generation of weight matrices and node energy levels.
//!
//! Each generator owns its own [`StdRng`] built from an explicit seed, so the
//! same seed always reproduces the same network and nothing touches global
//! random state.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{
    validate_energy_range, validate_node_count, validate_weight_bound, NetworkConfig,
};
use crate::error::Result;
use crate::network::{Energy, EnergyLevels, Network, WeightMatrix};

/// Mixed into the seed for energy sampling so the matrix and the energy levels
/// come from independent streams even when they share a seed.
const ENERGY_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generate a `node_count`×`node_count` matrix with off-diagonal weights drawn
/// uniformly from `[0, max_weight)` and a zero diagonal.
pub fn generate_weight_matrix(
    node_count: usize,
    max_weight: f64,
    seed: u64,
) -> Result<WeightMatrix> {
    validate_node_count(node_count)?;
    validate_weight_bound(max_weight)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut weights = Vec::with_capacity(node_count * node_count);
    for row in 0..node_count {
        for column in 0..node_count {
            let value = if row == column {
                0.0
            } else {
                rng.random_range(0.0..max_weight)
            };
            weights.push(value);
        }
    }

    debug!(node_count, max_weight, seed, "generated weight matrix");
    Ok(WeightMatrix::from_validated(node_count, weights))
}

/// Assign each node an energy level drawn uniformly from `range`.
pub fn assign_energy_levels(
    node_count: usize,
    range: Range<Energy>,
    seed: u64,
) -> Result<EnergyLevels> {
    validate_node_count(node_count)?;
    validate_energy_range(&range)?;

    let mut rng = StdRng::seed_from_u64(seed ^ ENERGY_STREAM);
    let levels = (0..node_count)
        .map(|_| rng.random_range(range.clone()))
        .collect::<Vec<_>>();

    debug!(
        node_count,
        min = range.start,
        max = range.end,
        seed,
        "assigned energy levels"
    );
    Ok(EnergyLevels::new(levels))
}

/// Generate a complete [`Network`] from `config`.
pub fn build_network(config: &NetworkConfig) -> Result<Network> {
    config.validate()?;
    let weights = generate_weight_matrix(config.node_count, config.max_weight, config.seed)?;
    let energy =
        assign_energy_levels(config.node_count, config.energy_range.clone(), config.seed)?;
    Network::new(weights, energy)
}
