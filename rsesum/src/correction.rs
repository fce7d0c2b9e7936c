use crate::{Ions, Kernel, SumError};
use rsconsts::*;

// Each ion's i = j, L = 0 term is replaced by the finite limit of 1/r - phi(r):
//
//   E_self = -1/2 * psi0 * sum_i z_i^2

pub fn compute_energy_self_part(ions: &Ions, kernel: &Kernel) -> f64 {
    -0.5 * kernel.self_limit() * ions.sum_of_squared_charges()
}

// Uniform compensating background for a cell of net charge Q:
//
//   E_bg = -(2 pi / V) Q^2 int_0^rc phi(r) r^2 dr
//
// which tends to the Ewald G = 0 term -pi Q^2 / (2 V alpha^2) as rc grows.

pub fn compute_energy_background_part(ions: &Ions, kernel: &Kernel, volume: f64) -> f64 {
    let q = ions.total_charge();

    -TWOPI * q * q * kernel.radial_moment() / volume
}

// E_bg scales as 1/V, so dE_bg/d eps_ab = -E_bg delta_ab.
pub fn compute_stress_background_part(background_energy: f64, volume: f64) -> [[f64; 3]; 3] {
    let mut stress = [[0.0; 3]; 3];

    for i in 0..3 {
        stress[i][i] = -background_energy / volume;
    }

    stress
}

pub fn check_charge_neutrality(ions: &Ions) -> Result<(), SumError> {
    let q = ions.total_charge();

    let scale = ions
        .get_charges()
        .iter()
        .map(|z| z.abs())
        .sum::<f64>()
        .max(1.0);

    if q.abs() > EPS8 * scale {
        return Err(SumError::NonNeutralCell(q));
    }

    Ok(())
}
