//! Node identifiers and canonical node-pair keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{YMatrixError, YMatrixResult};

/// Identifier of an electrical node (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    #[inline]
    pub fn new(value: u64) -> Self {
        NodeId(value)
    }

    /// Checked constructor; node 0 is reserved.
    pub fn try_new(value: u64) -> YMatrixResult<Self> {
        if value == 0 {
            return Err(YMatrixError::InvalidNode(value));
        }
        Ok(NodeId(value))
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node#{}", self.0)
    }
}

/// Unordered node pair stored with `low <= high`.
///
/// A diagonal pair (`low == high`) keys a self-admittance; any other pair
/// keys the single stored copy of a mutual admittance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodePair {
    pub low: NodeId,
    pub high: NodeId,
}

impl NodePair {
    /// Canonicalize `(a, b)` so that `low = min(a, b)`, `high = max(a, b)`.
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            NodePair { low: a, high: b }
        } else {
            NodePair { low: b, high: a }
        }
    }

    #[inline]
    pub fn diagonal(node: NodeId) -> Self {
        NodePair {
            low: node,
            high: node,
        }
    }

    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low.value(), self.high.value())
    }
}
