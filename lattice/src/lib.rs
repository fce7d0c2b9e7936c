use rsconsts::*;
use vector3::*;

use std::fmt;

/// Errors raised while building a lattice from its basis vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Basis vectors are zero-length, coplanar or not finite
    Degenerate(String),
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::Degenerate(msg) => write!(f, "Degenerate lattice: {}", msg),
        }
    }
}

impl std::error::Error for LatticeError {}

// Lattice vectors a, b, c stored as the columns of the cell matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    data: [Vector3f64; 3],
}

impl Lattice {
    pub fn new(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3]) -> Result<Lattice, LatticeError> {
        Lattice::from_vectors(
            Vector3f64::from_array(*a),
            Vector3f64::from_array(*b),
            Vector3f64::from_array(*c),
        )
    }

    pub fn from_vectors(
        a: Vector3f64,
        b: Vector3f64,
        c: Vector3f64,
    ) -> Result<Lattice, LatticeError> {
        for (name, v) in ["a", "b", "c"].iter().zip([a, b, c].iter()) {
            if !v.is_finite() {
                return Err(LatticeError::Degenerate(format!(
                    "vector {} = ({}) is not finite",
                    name, v
                )));
            }

            if v.norm2() == 0.0 {
                return Err(LatticeError::Degenerate(format!(
                    "vector {} has zero length",
                    name
                )));
            }
        }

        // relative test, so the check is independent of the length unit
        let volume = a.cross_product(&b).dot_product(&c);
        let scale = a.norm2() * b.norm2() * c.norm2();

        if volume.abs() <= EPS10 * scale {
            return Err(LatticeError::Degenerate(format!(
                "vectors are coplanar (volume = {:e})",
                volume
            )));
        }

        Ok(Lattice { data: [a, b, c] })
    }

    pub fn get_vector_a(&self) -> Vector3f64 {
        self.data[0]
    }

    pub fn get_vector_b(&self) -> Vector3f64 {
        self.data[1]
    }

    pub fn get_vector_c(&self) -> Vector3f64 {
        self.data[2]
    }

    pub fn get_vectors(&self) -> &[Vector3f64; 3] {
        &self.data
    }

    // ( a x b ) . c
    pub fn volume(&self) -> f64 {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        a.cross_product(&b).dot_product(&c)
    }

    pub fn abs_volume(&self) -> f64 {
        self.volume().abs()
    }

    // ra = 2 x PI x (b x c) / volume
    // rb = 2 x PI x (c x a) / volume
    // rc = 2 x PI x (a x b) / volume
    pub fn reciprocal(&self) -> [Vector3f64; 3] {
        let factor = TWOPI / self.volume();

        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        [
            b.cross_product(&c) * factor,
            c.cross_product(&a) * factor,
            a.cross_product(&b) * factor,
        ]
    }

    /// Perpendicular distances between adjacent lattice planes.
    ///
    /// Entry k is the spacing of the planes spanned by the two basis vectors
    /// other than vector k, i.e. 2 pi / |b_k| for the reciprocal vector b_k.
    pub fn plane_spacings(&self) -> [f64; 3] {
        let blatt = self.reciprocal();

        [
            TWOPI / blatt[0].norm2(),
            TWOPI / blatt[1].norm2(),
            TWOPI / blatt[2].norm2(),
        ]
    }

    /// Longest body diagonal |+-a +-b +-c| of the cell.
    ///
    /// Any separation between two points of the home cell is shorter than this.
    pub fn max_diagonal(&self) -> f64 {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        [a + b + c, a + b - c, a - b + c, a - b - c]
            .iter()
            .map(|d| d.norm2())
            .fold(0.0, f64::max)
    }

    pub fn frac_to_cart(&self, pos_f: &Vector3f64) -> Vector3f64 {
        self.data[0] * pos_f.x + self.data[1] * pos_f.y + self.data[2] * pos_f.z
    }

    // rows of the inverse cell matrix are (b x c, c x a, a x b) / volume
    pub fn cart_to_frac(&self, pos_c: &Vector3f64) -> Vector3f64 {
        let blatt = self.reciprocal();

        Vector3f64::new(
            blatt[0].dot_product(pos_c) / TWOPI,
            blatt[1].dot_product(pos_c) / TWOPI,
            blatt[2].dot_product(pos_c) / TWOPI,
        )
    }

    /// Map a cartesian position into the home cell, fractional coordinates in [0, 1).
    pub fn wrap(&self, pos_c: &Vector3f64) -> Vector3f64 {
        let pos_f = self.cart_to_frac(pos_c).fract_floor();

        self.frac_to_cart(&pos_f)
    }

    /// Apply the deformation (I + eps) to every lattice vector.
    pub fn strained(&self, eps: &[[f64; 3]; 3]) -> Result<Lattice, LatticeError> {
        let a = apply_strain(eps, &self.get_vector_a());
        let b = apply_strain(eps, &self.get_vector_b());
        let c = apply_strain(eps, &self.get_vector_c());

        Lattice::from_vectors(a, b, c)
    }
}

/// (I + eps) v
pub fn apply_strain(eps: &[[f64; 3]; 3], v: &Vector3f64) -> Vector3f64 {
    let vs = v.as_slice();

    let mut out = [0.0; 3];

    for i in 0..3 {
        out[i] = vs[i];

        for j in 0..3 {
            out[i] += eps[i][j] * vs[j];
        }
    }

    Vector3f64::from_array(out)
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        write!(f,
               "{}\n{:25.16}\t{:25.16}\t{:25.16}\n{:25.16}\t{:25.16}\t{:25.16}\n{:25.16}\t{:25.16}\t{:25.16}", "Lattice",
               a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z)
    }
}
