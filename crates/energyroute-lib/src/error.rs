use thiserror::Error;

use crate::network::{Energy, NodeId};

/// Convenient result alias for the energyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// A route that cannot be found is not an error; see
/// [`RoutePlan::is_found`](crate::RoutePlan::is_found).
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Raised when a start or end node lies outside `[0, node_count)`.
    #[error("node index {index} is out of range for a network of {node_count} nodes")]
    InvalidNodeIndex { index: NodeId, node_count: usize },

    /// Raised when a network with zero nodes is requested.
    #[error("network must contain at least one node")]
    EmptyNetwork,

    /// Raised when the requested node count exceeds the supported size.
    #[error("network of {requested} nodes exceeds the supported maximum of {max}")]
    NodeCountTooLarge { requested: usize, max: usize },

    /// Raised when a weight matrix row does not match the matrix dimension.
    #[error("weight matrix row {row} has {actual} entries; expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Raised when a weight is negative or not finite.
    #[error("weight at [{row}][{column}] must be finite and non-negative, got {value}")]
    InvalidWeight { row: usize, column: usize, value: f64 },

    /// Raised when a self-loop carries a weight.
    #[error("diagonal weight at [{index}][{index}] must be 0, got {value}")]
    NonZeroDiagonal { index: usize, value: f64 },

    /// Raised when the energy levels do not cover every node of the matrix.
    #[error("expected {expected} energy levels, got {actual}")]
    EnergyLengthMismatch { expected: usize, actual: usize },

    /// Raised when the energy sampling range is empty.
    #[error("energy range [{min}, {max}) is empty")]
    InvalidEnergyRange { min: Energy, max: Energy },

    /// Raised when the weight upper bound is not a positive finite number.
    #[error("weight upper bound must be finite and positive, got {value}")]
    InvalidWeightBound { value: f64 },
}
