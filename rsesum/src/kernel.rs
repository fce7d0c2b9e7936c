//! Damped, shifted-force substitute for the Coulomb potential.
//!
//! With a = 1/rd and f(r) = erfc(a r) / r the pair potential is
//!
//!   phi(r) = f(r) - f(rc) - (r - rc) f'(rc)    for r < rc, zero beyond.
//!
//! phi and phi' both vanish at rc, and 1/r - phi(r) stays finite at r = 0.
//! Because f is convex, phi' = f'(r) - f'(rc) <= 0 on (0, rc].

use crate::Parameters;
use rsconsts::*;
use special::{erf, erfc};
use vector3::*;

/// One (i, j, L) contribution: separation r = x_i - x_j + L, |r|, phi(|r|), phi'(|r|).
#[derive(Debug, Copy, Clone)]
pub struct PairTerm {
    pub sep: Vector3f64,
    pub dist: f64,
    pub phi: f64,
    pub dphi: f64,
}

#[derive(Debug, Copy, Clone)]
pub struct Kernel {
    rc: f64,
    alpha: f64,
    f_rc: f64,
    df_rc: f64,
}

impl Kernel {
    pub fn new(params: &Parameters) -> Kernel {
        let rc = params.get_rc();
        let alpha = 1.0 / params.get_rd();

        Kernel {
            rc,
            alpha,
            f_rc: damped_coulomb(alpha, rc),
            df_rc: damped_coulomb_derivative(alpha, rc),
        }
    }

    pub fn get_rc(&self) -> f64 {
        self.rc
    }

    pub fn value(&self, r: f64) -> f64 {
        if r >= self.rc {
            return 0.0;
        }

        damped_coulomb(self.alpha, r) - self.f_rc - (r - self.rc) * self.df_rc
    }

    pub fn derivative(&self, r: f64) -> f64 {
        if r >= self.rc {
            return 0.0;
        }

        damped_coulomb_derivative(self.alpha, r) - self.df_rc
    }

    pub fn pair(&self, sep: Vector3f64, dist: f64) -> PairTerm {
        PairTerm {
            sep,
            dist,
            phi: self.value(dist),
            dphi: self.derivative(dist),
        }
    }

    /// lim_{r->0} ( 1/r - phi(r) )
    pub fn self_limit(&self) -> f64 {
        TWO_OVER_SQRT_PI * self.alpha + self.f_rc - self.rc * self.df_rc
    }

    /// int_0^rc phi(r) r^2 dr
    pub fn radial_moment(&self) -> f64 {
        let a = self.alpha;
        let rc = self.rc;

        let ar = a * rc;

        // int_0^rc erfc(a r) r dr
        let m_erfc = 0.5 * rc * rc * erfc(ar) + erf(ar) / (4.0 * a * a)
            - rc * (-ar * ar).exp() / (2.0 * a * PI.sqrt());

        // shift terms: f(rc) rc^3 / 3 and f'(rc) int_0^rc (r - rc) r^2 dr = -f'(rc) rc^4 / 12
        m_erfc - self.f_rc * rc.powi(3) / 3.0 + self.df_rc * rc.powi(4) / 12.0
    }
}

// erfc(a r) / r
fn damped_coulomb(alpha: f64, r: f64) -> f64 {
    erfc(alpha * r) / r
}

// d/dr [ erfc(a r) / r ]
fn damped_coulomb_derivative(alpha: f64, r: f64) -> f64 {
    let ar = alpha * r;

    -erfc(ar) / (r * r) - TWO_OVER_SQRT_PI * alpha * (-ar * ar).exp() / r
}
