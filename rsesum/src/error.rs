//! Error types for the real-space electrostatic sum

use lattice::LatticeError;
use std::fmt;

/// Input errors detected before any summation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SumError {
    /// Basis vectors are coplanar, zero-length or not finite
    InvalidLattice(String),
    /// rc <= 0, rd <= 0, rc <= rd, or a non-finite input value
    InvalidParameter(String),
    /// A position/charge sequence does not have length n, or n < 1
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// Net cell charge while charge neutrality is required
    NonNeutralCell(f64),
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumError::InvalidLattice(msg) => write!(f, "Invalid lattice: {}", msg),
            SumError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SumError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "Dimension mismatch: {} has length {}, expected {}",
                what, found, expected
            ),
            SumError::NonNeutralCell(q) => {
                write!(f, "Cell is not charge neutral: total charge = {:e}", q)
            }
        }
    }
}

impl std::error::Error for SumError {}

impl From<LatticeError> for SumError {
    fn from(e: LatticeError) -> Self {
        match e {
            LatticeError::Degenerate(msg) => SumError::InvalidLattice(msg),
        }
    }
}
