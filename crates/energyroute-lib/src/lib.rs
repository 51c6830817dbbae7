//! energyroute library entry points.
//!
//! This crate generates seeded networks of energy-carrying nodes joined by a
//! dense directed weight matrix, and finds the cheapest path between two nodes
//! that never enters a node whose energy is at or below a threshold.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod generate;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use config::{NetworkConfig, DEFAULT_SEED, MAX_NODE_COUNT};
pub use error::{Error, Result};
pub use generate::{assign_energy_levels, build_network, generate_weight_matrix};
pub use network::{Energy, EnergyLevels, Network, NodeId, WeightMatrix};
pub use output::{MatrixReport, RouteStep, RouteSummary};
pub use path::{find_path, path_weight, PathConstraints};
pub use routing::{plan_route, RoutePlan, RouteRequest};
