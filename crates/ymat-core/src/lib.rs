//! # ymat-core: Sparse Nodal Admittance Accumulation
//!
//! Builds the nodal admittance matrix (Y-matrix) of a power network one
//! transmission line at a time, storing only the nonzero cells.
//!
//! ## Model
//!
//! Each line between nodes `a` and `b` with series impedance `R + jX` and
//! shunt charging `C` contributes:
//!
//! ```text
//! Y[a,a] += y + jC/2
//! Y[b,b] += y + jC/2
//! Y[a,b] -= y            (stored once, read symmetrically)
//!
//! where y = 1/(R + jX) = R/(R²+X²) - jX/(R²+X²)
//! ```
//!
//! Cells whose accumulated value returns to exactly zero are dropped, so the
//! store always reflects the live sparsity pattern of the network.
//!
//! ## Quick Start
//!
//! ```rust
//! use ymat_core::{LineParams, NodeId, YMatrixAccumulator};
//!
//! let mut ymat = YMatrixAccumulator::new();
//! let (n1, n2) = (NodeId::new(1), NodeId::new(2));
//! ymat.add_line(n1, n2, LineParams::new(1.0, 2.0, 0.5)).unwrap();
//!
//! let y11 = ymat.get(n1, n1);
//! assert!((y11.re - 0.2).abs() < 1e-12);
//! assert!((y11.im + 0.15).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`accumulator`] - The sparse store and its add/subtract/lookup operations
//! - [`admittance`] - Series impedance to admittance conversion
//! - [`node`] - Node identifiers and canonical node pairs
//! - [`error`] - Error type shared by the workspace

pub mod accumulator;
pub mod admittance;
pub mod error;
pub mod node;

pub use accumulator::{Entry, YMatrixAccumulator};
pub use admittance::{series_admittance, LineParams, Sign};
pub use error::{YMatrixError, YMatrixResult};
pub use node::{NodeId, NodePair};
pub use num_complex::Complex64;
