use crate::images::{cell_to_cart, make_near_cells};
use crate::{Ions, Kernel, Parallelism, Parameters, PairTerm, SumError};
use lattice::Lattice;
use vector3::*;

const PARALLEL_MIN_IONS: usize = 2;

/// Everything the pair loops share for one evaluation: wrapped positions,
/// charges, the cartesian image translations and the kernel.
pub struct PairSum<'a> {
    positions: Vec<Vector3f64>,
    charges: &'a [f64],
    cells: Vec<Vector3f64>,
    kernel: Kernel,
    parallelism: Parallelism,
}

impl<'a> PairSum<'a> {
    pub fn new(latt: &Lattice, ions: &'a Ions, params: &Parameters) -> Result<PairSum<'a>, SumError> {
        let kernel = Kernel::new(params);

        let cells = make_near_cells(latt, kernel.get_rc())?
            .iter()
            .map(|cell| cell_to_cart(latt, cell))
            .collect::<Vec<Vector3f64>>();

        // translations only; results do not depend on which image of an ion is given
        let positions = ions
            .get_positions()
            .iter()
            .map(|p| latt.wrap(p))
            .collect::<Vec<Vector3f64>>();

        log::debug!(
            "pair sum: {} ions, {} images, rc = {}, rd = {}",
            positions.len(),
            cells.len(),
            params.get_rc(),
            params.get_rd()
        );

        Ok(PairSum {
            positions,
            charges: ions.get_charges(),
            cells,
            kernel,
            parallelism: params.get_parallelism(),
        })
    }

    pub fn get_n_ions(&self) -> usize {
        self.positions.len()
    }

    pub fn get_n_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get_charges(&self) -> &[f64] {
        self.charges
    }

    pub fn get_kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn use_parallel(&self) -> bool {
        self.parallelism == Parallelism::Rayon
            && self.positions.len() >= PARALLEL_MIN_IONS
            && rayon::current_num_threads() > 1
    }

    /// Visit every (j, L) with 0 < |x_i - x_j + L| < rc for a fixed ion i.
    ///
    /// The callback gets j and the separation vector and length; the i = j,
    /// L = 0 term has zero length and is never visited.
    #[inline]
    pub fn for_each_partner<F>(&self, i: usize, mut f: F)
    where
        F: FnMut(usize, Vector3f64, f64),
    {
        let rc = self.kernel.get_rc();
        let rc2 = rc * rc;

        let xi = self.positions[i];

        for (j, xj) in self.positions.iter().enumerate() {
            let d = xi - *xj;

            for cell in self.cells.iter() {
                let sep = d + *cell;
                let r2 = sep.dot_product(&sep);

                if r2 >= rc2 || r2 == 0.0 {
                    continue;
                }

                f(j, sep, r2.sqrt());
            }
        }
    }

    /// Same walk as for_each_partner with the kernel value and derivative attached.
    #[inline]
    pub fn for_each_pair_term<F>(&self, i: usize, mut f: F)
    where
        F: FnMut(usize, &PairTerm),
    {
        let kernel = self.kernel;

        self.for_each_partner(i, |j, sep, dist| {
            let term = kernel.pair(sep, dist);
            f(j, &term);
        });
    }
}
