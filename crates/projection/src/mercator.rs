//! Spherical Mercator ("merc").

use crate::engine::SphericalCore;
use proj_common::{ProjError, ProjResult, HALF_PI, TOL};
use std::f64::consts::FRAC_PI_4;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mercator;

impl SphericalCore for Mercator {
    const NAME: &'static str = "merc";

    fn forward(&self, lam: f64, phi: f64) -> ProjResult<(f64, f64)> {
        if (phi.abs() - HALF_PI).abs() <= TOL {
            return Err(ProjError::tolerance("merc: poles project to infinity"));
        }
        Ok((lam, (FRAC_PI_4 + 0.5 * phi).tan().ln()))
    }

    fn inverse(&self, x: f64, y: f64) -> ProjResult<Option<(f64, f64)>> {
        Ok(Some((x, y.sinh().atan())))
    }
}
