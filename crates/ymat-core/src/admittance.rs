//! Series impedance to admittance conversion for a single line.
//!
//! ```text
//! y = 1 / (R + jX) = G + jB
//!
//! G =  R / (R² + X²)
//! B = -X / (R² + X²)
//! ```
//!
//! Computed in the quotient form above, not as a complex reciprocal.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Electrical parameters of one transmission line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    /// Series resistance R
    pub resistance: f64,
    /// Series reactance X
    pub reactance: f64,
    /// Total shunt charging C, split evenly between both ends
    pub charging: f64,
}

impl LineParams {
    pub fn new(resistance: f64, reactance: f64, charging: f64) -> Self {
        Self {
            resistance,
            reactance,
            charging,
        }
    }

    /// Series admittance `1/(R + jX)`, or `None` when `R² + X² == 0`.
    pub fn series_admittance(&self) -> Option<Complex64> {
        series_admittance(self.resistance, self.reactance)
    }

    /// Diagonal contribution: series admittance plus half the charging.
    #[inline]
    pub fn self_term(&self, y_series: Complex64) -> Complex64 {
        Complex64::new(y_series.re, y_series.im + self.charging / 2.0)
    }

    /// Off-diagonal contribution: the negated series admittance.
    #[inline]
    pub fn mutual_term(&self, y_series: Complex64) -> Complex64 {
        Complex64::new(-y_series.re, -y_series.im)
    }
}

/// Convert series impedance `R + jX` into admittance `G + jB`.
pub fn series_admittance(resistance: f64, reactance: f64) -> Option<Complex64> {
    let denom = resistance * resistance + reactance * reactance;
    if denom == 0.0 {
        return None;
    }
    Some(Complex64::new(resistance / denom, -reactance / denom))
}

/// Direction of an update: add a line to the network or take it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Add,
    Subtract,
}

impl Sign {
    #[inline]
    pub fn apply(self, delta: Complex64) -> Complex64 {
        match self {
            Sign::Add => delta,
            Sign::Subtract => -delta,
        }
    }
}
