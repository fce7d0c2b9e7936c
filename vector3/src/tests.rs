use super::*;

#[test]
fn test_vector3f64_basic() {
    let v = Vector3f64::new(1.0, 2.0, 3.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
    assert_eq!(v.z, 3.0);
}

#[test]
fn test_vector3f64_zeros() {
    let v = Vector3f64::new(1.0, 2.0, 3.0);
    assert!(!v.is_zero());
    assert!(Vector3f64::zeros().is_zero());
    assert!((v - v).is_zero());
}

#[test]
fn test_vector3f64_array_conversion() {
    let v = Vector3f64::from_array([1.0, -2.0, 3.5]);
    assert_eq!(v.to_array(), [1.0, -2.0, 3.5]);
    assert_eq!(v.as_slice(), &[1.0, -2.0, 3.5]);
}

#[test]
fn test_vector3f64_dot_cross() {
    let a = Vector3f64::new(1.0, 0.0, 0.0);
    let b = Vector3f64::new(0.0, 1.0, 0.0);

    let c = a.cross_product(&b);
    assert_eq!(c, Vector3f64::new(0.0, 0.0, 1.0));

    // a x b is orthogonal to both
    let u = Vector3f64::new(0.3, -1.2, 2.0);
    let w = Vector3f64::new(-0.7, 0.4, 1.1);
    let uw = u.cross_product(&w);
    assert!(uw.dot_product(&u).abs() < 1E-14);
    assert!(uw.dot_product(&w).abs() < 1E-14);
}

#[test]
fn test_vector3f64_norm2() {
    let v = Vector3f64::new(3.0, 4.0, 12.0);
    assert!((v.norm2() - 13.0).abs() < 1E-14);
}

#[test]
fn test_vector3f64_arithmetic() {
    let a = Vector3f64::new(1.0, 2.0, 3.0);
    let b = Vector3f64::new(0.5, -1.0, 4.0);

    assert_eq!(a + b, Vector3f64::new(1.5, 1.0, 7.0));
    assert_eq!(a - b, Vector3f64::new(0.5, 3.0, -1.0));
    assert_eq!(-a, Vector3f64::new(-1.0, -2.0, -3.0));
    assert_eq!(a * 2.0, Vector3f64::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 2.0, Vector3f64::new(0.5, 1.0, 1.5));

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn test_vector3f64_fract_floor() {
    let v = Vector3f64::new(1.25, -0.25, 0.0).fract_floor();
    assert!((v.x - 0.25).abs() < 1E-15);
    assert!((v.y - 0.75).abs() < 1E-15);
    assert_eq!(v.z, 0.0);
}

#[test]
fn test_vector3f64_is_finite() {
    assert!(Vector3f64::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Vector3f64::new(f64::NAN, 2.0, 3.0).is_finite());
    assert!(!Vector3f64::new(1.0, f64::INFINITY, 3.0).is_finite());
}

#[test]
fn test_vector3i32() {
    let n = Vector3i32::new(1, -2, 3);
    assert_eq!(-n, Vector3i32::new(-1, 2, -3));
    assert!(Vector3i32::zeros().is_zero());
    assert_eq!(format!("{}", n), "1 -2 3");
}
