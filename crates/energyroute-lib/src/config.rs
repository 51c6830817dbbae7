//! Parameters controlling network generation and routing.

use std::ops::Range;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::Energy;

/// Upper bound on generated network sizes. Dense matrices grow quadratically,
/// and the relaxation scans every node per pop.
pub const MAX_NODE_COUNT: usize = 500;

/// Default exclusive upper bound for generated edge weights.
pub const DEFAULT_MAX_WEIGHT: f64 = 10.0;

/// Default half-open energy range assigned to nodes.
pub const DEFAULT_ENERGY_RANGE: Range<Energy> = 15..100;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 50;

/// Configuration used to generate a [`Network`](crate::Network).
///
/// The energy threshold is a per-query setting carried by
/// [`RouteRequest`](crate::RouteRequest), not part of the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkConfig {
    pub node_count: usize,
    /// Exclusive upper bound for off-diagonal weights.
    pub max_weight: f64,
    /// Half-open `[min, max)` range for node energy.
    pub energy_range: Range<Energy>,
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            max_weight: DEFAULT_MAX_WEIGHT,
            energy_range: DEFAULT_ENERGY_RANGE,
            seed: DEFAULT_SEED,
        }
    }
}

impl NetworkConfig {
    /// Convenience constructor for `node_count` nodes with default parameters.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            ..Self::default()
        }
    }

    /// Validate the configuration, returning the first violated rule.
    pub fn validate(&self) -> Result<()> {
        validate_node_count(self.node_count)?;
        validate_weight_bound(self.max_weight)?;
        validate_energy_range(&self.energy_range)
    }
}

pub(crate) fn validate_node_count(node_count: usize) -> Result<()> {
    if node_count == 0 {
        return Err(Error::EmptyNetwork);
    }
    if node_count > MAX_NODE_COUNT {
        return Err(Error::NodeCountTooLarge {
            requested: node_count,
            max: MAX_NODE_COUNT,
        });
    }
    Ok(())
}

pub(crate) fn validate_weight_bound(max_weight: f64) -> Result<()> {
    if !max_weight.is_finite() || max_weight <= 0.0 {
        return Err(Error::InvalidWeightBound { value: max_weight });
    }
    Ok(())
}

pub(crate) fn validate_energy_range(range: &Range<Energy>) -> Result<()> {
    if range.start >= range.end {
        return Err(Error::InvalidEnergyRange {
            min: range.start,
            max: range.end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NetworkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 50);
        assert_eq!(config.energy_range, 15..100);
    }

    #[test]
    fn rejects_zero_and_oversized_networks() {
        assert_eq!(
            NetworkConfig::with_nodes(0).validate(),
            Err(Error::EmptyNetwork)
        );
        assert_eq!(
            NetworkConfig::with_nodes(MAX_NODE_COUNT + 1).validate(),
            Err(Error::NodeCountTooLarge {
                requested: MAX_NODE_COUNT + 1,
                max: MAX_NODE_COUNT
            })
        );
    }

    #[test]
    fn rejects_bad_weight_bounds() {
        for value in [0.0, -3.0, f64::INFINITY] {
            let config = NetworkConfig {
                max_weight: value,
                ..NetworkConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidWeightBound { .. })
            ));
        }
    }

    #[test]
    fn rejects_empty_energy_range() {
        let config = NetworkConfig {
            energy_range: Range { start: 40, end: 40 },
            ..NetworkConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidEnergyRange { min: 40, max: 40 })
        );
    }
}
