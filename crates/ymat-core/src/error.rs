//! Error type for Y-matrix construction.

use thiserror::Error;

use crate::node::NodeId;

/// Errors raised while accumulating admittance entries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YMatrixError {
    /// The line has `R = X = 0`; its admittance is unbounded.
    #[error("Line {node1}-{node2} has zero impedance")]
    ZeroImpedance { node1: NodeId, node2: NodeId },

    /// Node index 0 is not a valid node.
    #[error("Invalid node index: {0}")]
    InvalidNode(u64),

    /// The store could not grow to hold a new entry.
    #[error("Storage exhausted while growing admittance store to {requested} slots")]
    StorageExhausted { requested: usize },
}

/// Convenience type alias for Results using YMatrixError.
pub type YMatrixResult<T> = Result<T, YMatrixError>;
