pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

#[test]
fn test_erf_erfc() {
    assert_eq!(erf(0.0), 0.0);
    assert_eq!(erfc(0.0), 1.0);

    for &x in [0.1, 0.5, 1.0, 2.0, 3.5].iter() {
        assert!((erf(x) + erfc(x) - 1.0).abs() < 1E-15);
        assert!((erf(-x) + erf(x)).abs() < 1E-15);
    }

    // erfc(6) ~ 2.15e-17, the cutoff tail at rc = 6 rd
    assert!(erfc(6.0) < 3E-17);
    assert!(erfc(6.0) > 1E-17);
}
