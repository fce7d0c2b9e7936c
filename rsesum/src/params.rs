use crate::SumError;

/// Whether the pair loops may run on the rayon pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parallelism {
    Serial,
    Rayon,
}

impl Default for Parallelism {
    fn default() -> Self {
        Parallelism::Rayon
    }
}

/// Cutoff radius rc and damping length rd of the pair kernel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Parameters {
    rc: f64,
    rd: f64,
    require_neutral: bool,
    parallelism: Parallelism,
}

impl Parameters {
    pub fn new(rc: f64, rd: f64) -> Result<Parameters, SumError> {
        if !rc.is_finite() || rc <= 0.0 {
            return Err(SumError::InvalidParameter(format!(
                "cutoff radius rc = {} must be positive",
                rc
            )));
        }

        if !rd.is_finite() || rd <= 0.0 {
            return Err(SumError::InvalidParameter(format!(
                "damping length rd = {} must be positive",
                rd
            )));
        }

        if rc <= rd {
            return Err(SumError::InvalidParameter(format!(
                "cutoff radius rc = {} must exceed damping length rd = {}",
                rc, rd
            )));
        }

        Ok(Parameters {
            rc,
            rd,
            require_neutral: false,
            parallelism: Parallelism::default(),
        })
    }

    /// rc = 3 k^2 h, rd = k h
    ///
    /// With h no smaller than the largest interplanar spacing of the cell and
    /// k = 2 the sum agrees with Ewald summation to ~1e-12 relative.
    pub fn from_scaled(k: f64, h: f64) -> Result<Parameters, SumError> {
        if !k.is_finite() || k <= 0.0 || !h.is_finite() || h <= 0.0 {
            return Err(SumError::InvalidParameter(format!(
                "rd_hat = {} and h_max = {} must be positive",
                k, h
            )));
        }

        Parameters::new(3.0 * k * k * h, k * h)
    }

    /// Reject cells with a net charge instead of adding the background term.
    pub fn with_neutrality(mut self, require_neutral: bool) -> Parameters {
        self.require_neutral = require_neutral;
        self
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Parameters {
        self.parallelism = parallelism;
        self
    }

    pub fn get_rc(&self) -> f64 {
        self.rc
    }

    pub fn get_rd(&self) -> f64 {
        self.rd
    }

    pub fn requires_neutral(&self) -> bool {
        self.require_neutral
    }

    pub fn get_parallelism(&self) -> Parallelism {
        self.parallelism
    }
}
