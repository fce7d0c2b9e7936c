mod common;

use common::*;
use lattice::{apply_strain, Lattice};
use rsesum::*;
use vector3::*;

#[test]
fn test_force_quartz_finite_difference() {
    let s = quartz();
    let params = s.params();

    let force = compute_force(&s.latt, &s.ions, &params).unwrap();

    let d = 1E-4;

    let energy_with = |i: usize, k: usize, step: f64| {
        let mut positions = s.ions.get_positions().to_vec();

        let mut p = positions[i].to_array();
        p[k] += step;
        positions[i] = s.latt.wrap(&Vector3f64::from_array(p));

        let ions = Ions::new(positions, s.ions.get_charges().to_vec()).unwrap();

        compute_energy(&s.latt, &ions, &params).unwrap()
    };

    for i in 0..s.n_ions() {
        for k in 0..3 {
            let fd = -(energy_with(i, k, d) - energy_with(i, k, -d)) / (2.0 * d);

            assert_close(force[i].as_slice()[k], fd, 1E-6);
        }
    }
}

#[test]
fn test_stress_strained_quartz_finite_difference() {
    let t = [
        [-0.25, 0.35, -0.15],
        [0.35, 0.15, 0.25],
        [-0.15, 0.25, -0.20],
    ];

    let latt = quartz_lattice().strained(&t).unwrap();
    let s = make_structure(latt, &QUARTZ_FRAC, quartz_charges(), 10.21);
    let params = s.params();

    let stress = compute_stress(&s.latt, &s.ions, &params).unwrap().voigt();

    let d = 1E-4;

    // xx, yy, zz, yz, xz, xy
    let modes = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

    let energy_with = |a: usize, b: usize, step: f64| {
        let mut eps = [[0.0; 3]; 3];
        eps[a][b] = step;

        let latt = s.latt.strained(&eps).unwrap();
        let positions = s
            .ions
            .get_positions()
            .iter()
            .map(|p| apply_strain(&eps, p))
            .collect();
        let ions = Ions::new(positions, s.ions.get_charges().to_vec()).unwrap();

        compute_energy(&latt, &ions, &params).unwrap()
    };

    let volume = s.latt.volume();

    for (m, &(a, b)) in modes.iter().enumerate() {
        let fd = (energy_with(a, b, d) - energy_with(a, b, -d)) / (2.0 * d) / volume;

        assert_close(stress[m], fd, 1E-8);
    }
}

#[test]
fn test_stress_of_uniform_scaling() {
    // converged Coulomb energy scales as 1/s under x -> s x, so tr(S) V = -E
    let s = silicon();
    let params = s.params();

    let sum = RealSpaceSum::new(&s.latt, &s.ions, &params).unwrap();
    let m = sum.get_stress().as_matrix();

    let trace = m[0][0] + m[1][1] + m[2][2];

    assert_close(trace * s.latt.volume(), -sum.get_energy(), 1E-8);
    assert_close(sum.get_stress().pressure(), sum.get_energy() / (3.0 * s.latt.volume()), 1E-10);
}

#[test]
fn test_stress_is_symmetric() {
    let s = quartz();

    let latt = Lattice::from_vectors(
        s.latt.get_vector_a(),
        s.latt.get_vector_b() + s.latt.get_vector_a() * 0.1,
        s.latt.get_vector_c() + s.latt.get_vector_b() * 0.2,
    )
    .unwrap();

    let stress = compute_stress(&latt, &s.ions, &s.params()).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            assert_close(stress.get(i, j), stress.get(j, i), 1E-12);
        }
    }
}
