use crate::SumError;
use itertools::multizip;
use vector3::*;

/// Point charges of one cell: cartesian positions and charges, same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ions {
    positions: Vec<Vector3f64>,
    charges: Vec<f64>,
}

impl Ions {
    pub fn new(positions: Vec<Vector3f64>, charges: Vec<f64>) -> Result<Ions, SumError> {
        let n = positions.len();

        check_len("positions", 1.max(n), n)?;
        check_len("charge", n, charges.len())?;

        for (i, p) in positions.iter().enumerate() {
            if !p.is_finite() {
                return Err(SumError::InvalidParameter(format!(
                    "position of ion {} = ({}) is not finite",
                    i, p
                )));
            }
        }

        for (i, z) in charges.iter().enumerate() {
            if !z.is_finite() {
                return Err(SumError::InvalidParameter(format!(
                    "charge of ion {} = {} is not finite",
                    i, z
                )));
            }
        }

        Ok(Ions { positions, charges })
    }

    /// Build from separate coordinate sequences, each of which must have length n.
    pub fn from_components(
        n: usize,
        x: &[f64],
        y: &[f64],
        z: &[f64],
        charge: &[f64],
    ) -> Result<Ions, SumError> {
        check_len("n", 1.max(n), n)?;
        check_len("x", n, x.len())?;
        check_len("y", n, y.len())?;
        check_len("z", n, z.len())?;
        check_len("charge", n, charge.len())?;

        let positions = multizip((x, y, z))
            .map(|(&x, &y, &z)| Vector3f64::new(x, y, z))
            .collect();

        Ions::new(positions, charge.to_vec())
    }

    pub fn get_n_ions(&self) -> usize {
        self.positions.len()
    }

    pub fn get_positions(&self) -> &[Vector3f64] {
        &self.positions
    }

    pub fn get_charges(&self) -> &[f64] {
        &self.charges
    }

    pub fn total_charge(&self) -> f64 {
        self.charges.iter().sum()
    }

    pub fn sum_of_squared_charges(&self) -> f64 {
        self.charges.iter().map(|z| z * z).sum()
    }
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), SumError> {
    if expected != found {
        return Err(SumError::DimensionMismatch {
            what,
            expected,
            found,
        });
    }

    Ok(())
}
