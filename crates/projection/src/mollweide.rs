//! Mollweide equal-area pseudocylindrical projection ("moll").
//!
//! The forward projection needs the auxiliary angle `gamma` solving
//! `2γ + sin 2γ = π sin φ`, found by Newton-Raphson iteration.
//!
//! Close to the poles that equation loses all precision (`sin φ` rounds to
//! 1), so there it is solved for `u = π/2 - |γ|` instead:
//! `2u - sin 2u = π (1 - sin φ)`, with `1 - sin φ = 2 sin²(ε/2)` and
//! `ε = π/2 - |φ|`.

use crate::engine::SphericalCore;
use proj_common::angle::asin_safe;
use proj_common::{ProjResult, HALF_PI, TOL};
use std::f64::consts::{PI, SQRT_2};

const MAX_ITER: usize = 50;
const LOOP_TOL: f64 = 1e-14;

/// Colatitude below which the forward solves for `u`.
const POLAR_EPS: f64 = 0.1;
/// `u` below which the inverse recovers the colatitude from `u`.
const POLAR_U: f64 = 0.25;

/// 2√2 / π
const C_X: f64 = 2.0 * SQRT_2 / PI;
/// √2
const C_Y: f64 = SQRT_2;

/// `x - sin x` without cancellation for small `x`.
fn x_minus_sin(x: f64) -> f64 {
    if x.abs() >= 0.5 {
        return x - x.sin();
    }
    let x2 = x * x;
    let mut term = x * x2 / 6.0;
    let mut sum = term;
    let mut n = 3.0;
    while term.abs() > f64::EPSILON * sum.abs() {
        term *= -x2 / ((n + 1.0) * (n + 2.0));
        sum += term;
        n += 2.0;
    }
    sum
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mollweide;

impl Mollweide {
    fn auxiliary_angle(phi: f64) -> f64 {
        let eps = HALF_PI - phi.abs();
        if eps <= 0.0 {
            return HALF_PI.copysign(phi);
        }
        if eps < POLAR_EPS {
            return (HALF_PI - Self::polar_offset(eps)).copysign(phi);
        }

        let k = PI * phi.sin();
        let mut gamma = phi;
        for _ in 0..MAX_ITER {
            let two_gamma = 2.0 * gamma;
            let delta = (two_gamma + two_gamma.sin() - k) / (2.0 + 2.0 * two_gamma.cos());
            gamma -= delta;
            if delta.abs() < LOOP_TOL {
                break;
            }
        }
        gamma.clamp(-HALF_PI, HALF_PI)
    }

    /// `u = π/2 - |γ|` for a point `eps` away from a pole.
    fn polar_offset(eps: f64) -> f64 {
        let half = (eps / 2.0).sin();
        let c = 2.0 * PI * half * half;

        // Asymptotic solution 4u³/3 = c as the starting point
        let mut u = (0.75 * c).cbrt();
        for _ in 0..MAX_ITER {
            let sin_u = u.sin();
            let delta = (x_minus_sin(2.0 * u) - c) / (4.0 * sin_u * sin_u);
            if !delta.is_finite() {
                break;
            }
            u -= delta;
            if delta.abs() <= LOOP_TOL * u {
                break;
            }
        }
        u
    }
}

impl SphericalCore for Mollweide {
    const NAME: &'static str = "moll";

    fn forward(&self, lam: f64, phi: f64) -> ProjResult<(f64, f64)> {
        let gamma = Self::auxiliary_angle(phi);
        let (sin_gamma, cos_gamma) = gamma.sin_cos();
        Ok((C_X * lam * cos_gamma, C_Y * sin_gamma))
    }

    fn inverse(&self, x: f64, y: f64) -> ProjResult<Option<(f64, f64)>> {
        let sin_gamma = y / C_Y;
        if sin_gamma.abs() > 1.0 + TOL {
            return Ok(None);
        }
        // u = π/2 - |γ|
        let u = sin_gamma.abs().min(1.0).acos();
        let cos_gamma = u.sin();

        let lam = if cos_gamma < TOL {
            // Poles are points: only x = 0 lies on the boundary ellipse
            if x.abs() > TOL {
                return Ok(None);
            }
            0.0
        } else {
            x / (C_X * cos_gamma)
        };
        if lam.abs() > PI + TOL {
            return Ok(None);
        }

        let phi = if u < POLAR_U {
            let eps = 2.0 * (x_minus_sin(2.0 * u) / (2.0 * PI)).sqrt().asin();
            (HALF_PI - eps).copysign(sin_gamma)
        } else {
            let two_gamma = 2.0 * asin_safe(sin_gamma);
            asin_safe((two_gamma + two_gamma.sin()) / PI)
        };
        Ok(Some((lam.clamp(-PI, PI), phi)))
    }
}
