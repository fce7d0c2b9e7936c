use crate::correction::*;
use crate::{Ions, PairSum, Parameters, SumError};
use lattice::Lattice;
use rayon::prelude::*;

/// Total electrostatic energy of the periodic array of point charges.
pub fn compute_energy(latt: &Lattice, ions: &Ions, params: &Parameters) -> Result<f64, SumError> {
    let stopwatch = std::time::Instant::now();

    let pairs = crate::prepare(latt, ions, params)?;

    let energy_pair = compute_energy_pair_part(&pairs);
    let energy_self = compute_energy_self_part(ions, pairs.get_kernel());
    let energy_bg = compute_energy_background_part(ions, pairs.get_kernel(), latt.abs_volume());

    log::debug!(
        "energy: pair = {:.16e}, self = {:.16e}, background = {:.16e}",
        energy_pair,
        energy_self,
        energy_bg
    );
    log::trace!("energy: {:.6} s", stopwatch.elapsed().as_secs_f64());

    Ok(energy_pair + energy_self + energy_bg)
}

// 1/2 sum_i sum_(j, L) z_i z_j phi(|x_i - x_j + L|), ordered pairs

pub fn compute_energy_pair_part(pairs: &PairSum) -> f64 {
    let natoms = pairs.get_n_ions();
    let zions = pairs.get_charges();
    let kernel = pairs.get_kernel();

    let energy_of_ion = |i: usize| {
        let mut sum = 0.0;

        pairs.for_each_partner(i, |j, _sep, r| {
            sum += zions[j] * kernel.value(r);
        });

        0.5 * zions[i] * sum
    };

    if pairs.use_parallel() {
        (0..natoms).into_par_iter().map(energy_of_ion).sum()
    } else {
        (0..natoms).map(energy_of_ion).sum()
    }
}
