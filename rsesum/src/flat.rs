// Entry points over plain sequences: basis vectors a1, a2, a3, ion count n,
// coordinate sequences x, y, z and charges, each of length n, and the
// kernel parameters rc, rd. Lengths are checked against n before any work.

use crate::{compute_energy, compute_force, compute_stress, Ions, Parameters, SumError};
use lattice::Lattice;

#[allow(clippy::too_many_arguments)]
pub fn energy(
    a1: &[f64; 3],
    a2: &[f64; 3],
    a3: &[f64; 3],
    n: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    charge: &[f64],
    rc: f64,
    rd: f64,
) -> Result<f64, SumError> {
    let (latt, ions, params) = build_inputs(a1, a2, a3, n, x, y, z, charge, rc, rd)?;

    compute_energy(&latt, &ions, &params)
}

/// Returns (fx, fy, fz), each of length n.
#[allow(clippy::too_many_arguments)]
pub fn force(
    a1: &[f64; 3],
    a2: &[f64; 3],
    a3: &[f64; 3],
    n: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    charge: &[f64],
    rc: f64,
    rd: f64,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), SumError> {
    let (latt, ions, params) = build_inputs(a1, a2, a3, n, x, y, z, charge, rc, rd)?;

    let force = compute_force(&latt, &ions, &params)?;

    let fx = force.iter().map(|f| f.x).collect();
    let fy = force.iter().map(|f| f.y).collect();
    let fz = force.iter().map(|f| f.z).collect();

    Ok((fx, fy, fz))
}

/// Returns the stress in Voigt order (xx, yy, zz, yz, xz, xy).
#[allow(clippy::too_many_arguments)]
pub fn stress(
    a1: &[f64; 3],
    a2: &[f64; 3],
    a3: &[f64; 3],
    n: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    charge: &[f64],
    rc: f64,
    rd: f64,
) -> Result<[f64; 6], SumError> {
    let (latt, ions, params) = build_inputs(a1, a2, a3, n, x, y, z, charge, rc, rd)?;

    Ok(compute_stress(&latt, &ions, &params)?.voigt())
}

#[allow(clippy::too_many_arguments)]
fn build_inputs(
    a1: &[f64; 3],
    a2: &[f64; 3],
    a3: &[f64; 3],
    n: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    charge: &[f64],
    rc: f64,
    rd: f64,
) -> Result<(Lattice, Ions, Parameters), SumError> {
    let latt = Lattice::new(a1, a2, a3)?;
    let ions = Ions::from_components(n, x, y, z, charge)?;
    let params = Parameters::new(rc, rd)?;

    Ok((latt, ions, params))
}
