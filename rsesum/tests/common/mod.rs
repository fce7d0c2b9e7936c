#![allow(dead_code)]

use lattice::Lattice;
use rsesum::{Ions, Parameters};
use vector3::*;

pub struct Structure {
    pub latt: Lattice,
    pub ions: Ions,
    pub h_max: f64,
}

impl Structure {
    // rc = 3 k^2 h, rd = k h with k = 2
    pub fn params(&self) -> Parameters {
        Parameters::from_scaled(2.0, self.h_max).unwrap()
    }

    pub fn n_ions(&self) -> usize {
        self.ions.get_n_ions()
    }
}

pub fn make_structure(latt: Lattice, frac: &[[f64; 3]], charges: Vec<f64>, h_max: f64) -> Structure {
    let positions = frac
        .iter()
        .map(|p| latt.frac_to_cart(&Vector3f64::from_array(*p)))
        .collect();

    let ions = Ions::new(positions, charges).unwrap();

    Structure { latt, ions, h_max }
}

pub fn aluminum() -> Structure {
    let latt = Lattice::new(
        &[5.41141973394663, 0.00000000000000, 0.00000000000000],
        &[2.70570986697332, 4.68642696013821, 0.00000000000000],
        &[2.70570986697332, 1.56214232004608, 4.41840571073226],
    )
    .unwrap();

    make_structure(latt, &[[0.0, 0.0, 0.0]], vec![3.0], 4.42)
}

pub fn silicon() -> Structure {
    let latt = Lattice::new(
        &[7.25654832321381, 0.00000000000000, 0.00000000000000],
        &[3.62827416160690, 6.28435519169252, 0.00000000000000],
        &[3.62827416160690, 2.09478506389751, 5.92494689524090],
    )
    .unwrap();

    make_structure(
        latt,
        &[[0.0, 0.0, 0.0], [0.25, 0.25, 0.25]],
        vec![4.0, 4.0],
        5.92,
    )
}

pub const QUARTZ_FRAC: [[f64; 3]; 9] = [
    [0.41500, 0.27200, 0.21300],
    [0.72800, 0.14300, 0.54633],
    [0.85700, 0.58500, 0.87967],
    [0.27200, 0.41500, 0.78700],
    [0.14300, 0.72800, 0.45367],
    [0.58500, 0.85700, 0.12033],
    [0.46500, 0.00000, 0.33333],
    [0.00000, 0.46500, 0.66667],
    [0.53500, 0.53500, 0.00000],
];

pub fn quartz_lattice() -> Lattice {
    Lattice::new(
        &[9.28422445623683, 0.00000000000000, 0.00000000000000],
        &[-4.64211222811842, 8.04037423353787, 0.00000000000000],
        &[0.00000000000000, 0.00000000000000, 10.2139697101486],
    )
    .unwrap()
}

// six O (6) then three Si (4)
pub fn quartz_charges() -> Vec<f64> {
    let mut charges = vec![6.0; 9];
    charges[6..].iter_mut().for_each(|z| *z = 4.0);
    charges
}

pub fn quartz() -> Structure {
    make_structure(quartz_lattice(), &QUARTZ_FRAC, quartz_charges(), 10.21)
}

pub fn andalusite() -> Structure {
    let latt = Lattice::new(
        &[14.7289033699982, 0.00000000000000, 0.00000000000000],
        &[0.00000000000000, 14.9260018049230, 0.00000000000000],
        &[0.00000000000000, 0.00000000000000, 10.5049875335275],
    )
    .unwrap();

    let frac = [
        [0.23030, 0.13430, 0.23900],
        [0.76970, 0.86570, 0.23900],
        [0.26970, 0.63430, 0.26100],
        [0.73030, 0.36570, 0.26100],
        [0.76970, 0.86570, 0.76100],
        [0.23030, 0.13430, 0.76100],
        [0.73030, 0.36570, 0.73900],
        [0.26970, 0.63430, 0.73900],
        [0.00000, 0.00000, 0.24220],
        [0.50000, 0.50000, 0.25780],
        [0.00000, 0.00000, 0.75780],
        [0.50000, 0.50000, 0.74220],
        [0.37080, 0.13870, 0.50000],
        [0.42320, 0.36270, 0.50000],
        [0.62920, 0.86130, 0.50000],
        [0.57680, 0.63730, 0.50000],
        [0.12920, 0.63870, 0.00000],
        [0.07680, 0.86270, 0.00000],
        [0.87080, 0.36130, 0.00000],
        [0.92320, 0.13730, 0.00000],
        [0.24620, 0.25290, 0.00000],
        [0.42400, 0.36290, 0.00000],
        [0.10380, 0.40130, 0.00000],
        [0.75380, 0.74710, 0.00000],
        [0.57600, 0.63710, 0.00000],
        [0.89620, 0.59870, 0.00000],
        [0.25380, 0.75290, 0.50000],
        [0.07600, 0.86290, 0.50000],
        [0.39620, 0.90130, 0.50000],
        [0.74620, 0.24710, 0.50000],
        [0.92400, 0.13710, 0.50000],
        [0.60380, 0.09870, 0.50000],
    ];

    // O by default, eight Al, four Si
    let mut charges = vec![6.0; frac.len()];
    for &i in [8, 9, 10, 11, 12, 14, 16, 18].iter() {
        charges[i] = 3.0;
    }
    for &i in [20, 23, 26, 29].iter() {
        charges[i] = 4.0;
    }

    make_structure(latt, &frac, charges, 14.93)
}

pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{:.16e} vs {:.16e} (tol {:e})", a, b, tol);
}
