use serde::Serialize;

use crate::error::{Error, Result};

/// Node identifier: an index into the weight matrix.
pub type NodeId = usize;

/// Integer energy carried by a node.
pub type Energy = i64;

/// Dense directed weight table.
///
/// Entries are finite and non-negative and the diagonal is zero. A zero
/// off-diagonal weight means the edge is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightMatrix {
    size: usize,
    weights: Vec<f64>,
}

impl WeightMatrix {
    /// Build a matrix from row vectors, validating every invariant.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyNetwork);
        }

        let mut weights = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Error::NonSquareMatrix {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            for (column, value) in values.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidWeight { row, column, value });
                }
                if row == column && value != 0.0 {
                    return Err(Error::NonZeroDiagonal { index: row, value });
                }
                weights.push(value);
            }
        }

        Ok(Self { size, weights })
    }

    /// Construct from a flat row-major buffer the caller has already validated.
    pub(crate) fn from_validated(size: usize, weights: Vec<f64>) -> Self {
        debug_assert_eq!(weights.len(), size * size);
        Self { size, weights }
    }

    /// Number of nodes (rows and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range.
    pub fn weight(&self, from: NodeId, to: NodeId) -> f64 {
        assert!(from < self.size && to < self.size, "node index out of range");
        self.weights[from * self.size + to]
    }

    /// Outgoing weights of `from`, indexed by target node.
    ///
    /// # Panics
    ///
    /// Panics when `from` is out of range.
    pub fn row(&self, from: NodeId) -> &[f64] {
        let offset = from * self.size;
        &self.weights[offset..offset + self.size]
    }

    /// Iterate rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.weights.chunks(self.size)
    }
}

/// Per-node energy levels, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnergyLevels(Vec<Energy>);

impl EnergyLevels {
    pub fn new(levels: Vec<Energy>) -> Self {
        Self(levels)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Energy of `node`, or `None` when the index is out of range.
    pub fn get(&self, node: NodeId) -> Option<Energy> {
        self.0.get(node).copied()
    }

    pub fn as_slice(&self) -> &[Energy] {
        &self.0
    }
}

impl From<Vec<Energy>> for EnergyLevels {
    fn from(levels: Vec<Energy>) -> Self {
        Self(levels)
    }
}

/// A weight matrix paired with one energy level per node.
///
/// Immutable once built; queries borrow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    weights: WeightMatrix,
    energy: EnergyLevels,
}

impl Network {
    pub fn new(weights: WeightMatrix, energy: EnergyLevels) -> Result<Self> {
        if energy.len() != weights.size() {
            return Err(Error::EnergyLengthMismatch {
                expected: weights.size(),
                actual: energy.len(),
            });
        }
        Ok(Self { weights, energy })
    }

    pub fn node_count(&self) -> usize {
        self.weights.size()
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn energy(&self) -> &EnergyLevels {
        &self.energy
    }

    /// Fail with [`Error::InvalidNodeIndex`] unless `node` is in range.
    pub fn check_node(&self, node: NodeId) -> Result<NodeId> {
        if node < self.node_count() {
            Ok(node)
        } else {
            Err(Error::InvalidNodeIndex {
                index: node,
                node_count: self.node_count(),
            })
        }
    }
}
