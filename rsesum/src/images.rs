use crate::SumError;
use itertools::{iproduct, Itertools};
use lattice::Lattice;
use std::cmp::Ordering;
use vector3::*;

/// Lattice translations L = n1 a + n2 b + n3 c that can bring a pair of
/// home-cell ions within rc of each other.
///
/// In-cell separations have fractional components in (-1, 1), so an extent of
/// ceil(rc / d_k) + 1 planes along direction k covers every image, whatever the
/// skew of the cell. Translations longer than rc plus the longest body diagonal
/// are dropped. The result contains the zero translation and is sorted by |L|.
pub fn make_near_cells(latt: &Lattice, rc: f64) -> Result<Vec<Vector3i32>, SumError> {
    if !rc.is_finite() || rc <= 0.0 {
        return Err(SumError::InvalidParameter(format!(
            "cutoff radius rc = {} must be positive",
            rc
        )));
    }

    let spacings = latt.plane_spacings();

    let na = (rc / spacings[0]).ceil() as i32 + 1;
    let nb = (rc / spacings[1]).ceil() as i32 + 1;
    let nc = (rc / spacings[2]).ceil() as i32 + 1;

    let rmax = rc + latt.max_diagonal();

    let cells = iproduct!(-na..=na, -nb..=nb, -nc..=nc)
        .map(|(ia, ib, ic)| {
            let cell = Vector3i32::new(ia, ib, ic);

            (cell, cell_to_cart(latt, &cell).norm2())
        })
        .filter(|(_, r)| *r <= rmax)
        .sorted_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(Ordering::Equal))
        .map(|(cell, _)| cell)
        .collect::<Vec<Vector3i32>>();

    log::debug!(
        "near cells: rc = {}, extents = ({}, {}, {}), kept {} of {}",
        rc,
        na,
        nb,
        nc,
        cells.len(),
        (2 * na + 1) * (2 * nb + 1) * (2 * nc + 1)
    );

    Ok(cells)
}

pub fn cell_to_cart(latt: &Lattice, cell: &Vector3i32) -> Vector3f64 {
    latt.frac_to_cart(&Vector3f64::new(cell.x as f64, cell.y as f64, cell.z as f64))
}
