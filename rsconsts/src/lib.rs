use std::f64;

// pi

pub const PI: f64 = f64::consts::PI;
pub const TWOPI: f64 = 2.0 * f64::consts::PI;

// 2 / sqrt(pi)

pub const TWO_OVER_SQRT_PI: f64 = f64::consts::FRAC_2_SQRT_PI;

// numerical tolerances

pub const EPS8: f64 = 1E-8;
pub const EPS10: f64 = 1E-10;

// output layout

pub const OUT_WIDTH1: usize = 28;
pub const OUT_WIDTH2: usize = 18;
