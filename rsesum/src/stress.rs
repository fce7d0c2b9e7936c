use crate::correction::*;
use crate::{Ions, PairSum, Parameters, SumError};
use lattice::Lattice;
use rayon::prelude::*;
use vector3::*;

use std::fmt;

/// Symmetric stress tensor S_ab = (1/V) dE/d eps_ab.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Stress {
    data: [[f64; 3]; 3],
}

impl Stress {
    pub fn from_matrix(data: [[f64; 3]; 3]) -> Stress {
        Stress { data }
    }

    pub fn as_matrix(&self) -> &[[f64; 3]; 3] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }

    /// (xx, yy, zz, yz, xz, xy)
    pub fn voigt(&self) -> [f64; 6] {
        let s = &self.data;

        [s[0][0], s[1][1], s[2][2], s[1][2], s[0][2], s[0][1]]
    }

    /// -tr(S) / 3
    pub fn pressure(&self) -> f64 {
        -(self.data[0][0] + self.data[1][1] + self.data[2][2]) / 3.0
    }
}

impl fmt::Display for Stress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = &self.data;

        write!(
            f,
            "{:20.12}  {:20.12}  {:20.12}\n{:20.12}  {:20.12}  {:20.12}\n{:20.12}  {:20.12}  {:20.12}",
            s[0][0], s[0][1], s[0][2], s[1][0], s[1][1], s[1][2], s[2][0], s[2][1], s[2][2]
        )
    }
}

/// Stress from the pair virial plus the volume dependence of the background.
pub fn compute_stress(latt: &Lattice, ions: &Ions, params: &Parameters) -> Result<Stress, SumError> {
    let stopwatch = std::time::Instant::now();

    let pairs = crate::prepare(latt, ions, params)?;

    let volume = latt.abs_volume();

    let virial = compute_stress_pair_part(&pairs);
    let energy_bg = compute_energy_background_part(ions, pairs.get_kernel(), volume);

    let stress = assemble_stress(&virial, energy_bg, volume);

    log::trace!("stress: {:.6} s", stopwatch.elapsed().as_secs_f64());

    Ok(stress)
}

// 1/2 sum_i sum_(j, L) z_i z_j phi'(r) / r (r x r), not yet divided by the volume

pub fn compute_stress_pair_part(pairs: &PairSum) -> [[f64; 3]; 3] {
    let natoms = pairs.get_n_ions();
    let zions = pairs.get_charges();
    let kernel = pairs.get_kernel();

    let add_ion = |mut stress: [[f64; 3]; 3], i: usize| {
        pairs.for_each_partner(i, |j, sep, r| {
            let w = 0.5 * zions[i] * zions[j] * kernel.derivative(r) / r;
            add_outer_product(&mut stress, w, &sep);
        });

        stress
    };

    if pairs.use_parallel() {
        (0..natoms)
            .into_par_iter()
            .fold(|| [[0.0; 3]; 3], add_ion)
            .reduce(|| [[0.0; 3]; 3], add_matrix)
    } else {
        (0..natoms).fold([[0.0; 3]; 3], add_ion)
    }
}

pub fn assemble_stress(virial: &[[f64; 3]; 3], energy_bg: f64, volume: f64) -> Stress {
    let bg = compute_stress_background_part(energy_bg, volume);

    let mut data = [[0.0; 3]; 3];

    for i in 0..3 {
        for j in 0..3 {
            data[i][j] = virial[i][j] / volume + bg[i][j];
        }
    }

    Stress { data }
}

pub fn add_outer_product(stress: &mut [[f64; 3]; 3], w: f64, sep: &Vector3f64) {
    let v = sep.as_slice();

    for ii in 0..3 {
        for jj in 0..3 {
            stress[ii][jj] += w * v[ii] * v[jj];
        }
    }
}

fn add_matrix(mut a: [[f64; 3]; 3], b: [[f64; 3]; 3]) -> [[f64; 3]; 3] {
    for i in 0..3 {
        for j in 0..3 {
            a[i][j] += b[i][j];
        }
    }

    a
}
