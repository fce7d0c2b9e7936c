use crate::{Ions, PairSum, Parameters, SumError};
use lattice::Lattice;
use rayon::prelude::*;
use vector3::*;

/// Force on every ion, in input order. The corrections do not depend on
/// positions, so only the pair part contributes.
pub fn compute_force(
    latt: &Lattice,
    ions: &Ions,
    params: &Parameters,
) -> Result<Vec<Vector3f64>, SumError> {
    let stopwatch = std::time::Instant::now();

    let pairs = crate::prepare(latt, ions, params)?;

    let force = compute_force_pair_part(&pairs);

    log::trace!("force: {:.6} s", stopwatch.elapsed().as_secs_f64());

    Ok(force)
}

// F_i = - sum_(j, L) z_i z_j phi'(r) r / |r|
//
// The (j, i, -L) visit supplies the opposite contribution on ion j.

pub fn compute_force_pair_part(pairs: &PairSum) -> Vec<Vector3f64> {
    let natoms = pairs.get_n_ions();
    let zions = pairs.get_charges();
    let kernel = pairs.get_kernel();

    let force_on_ion = |i: usize| {
        let mut v = Vector3f64::zeros();

        pairs.for_each_partner(i, |j, sep, r| {
            v -= sep * (zions[j] * kernel.derivative(r) / r);
        });

        v * zions[i]
    };

    if pairs.use_parallel() {
        (0..natoms).into_par_iter().map(force_on_ion).collect()
    } else {
        (0..natoms).map(force_on_ion).collect()
    }
}
