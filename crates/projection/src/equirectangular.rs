//! Equidistant cylindrical ("eqc") on the sphere, standard parallel 0.

use crate::engine::SphericalCore;
use proj_common::{ProjResult, HALF_PI, TOL};

#[derive(Debug, Clone, Copy, Default)]
pub struct Equirectangular;

impl SphericalCore for Equirectangular {
    const NAME: &'static str = "eqc";

    fn forward(&self, lam: f64, phi: f64) -> ProjResult<(f64, f64)> {
        Ok((lam, phi))
    }

    fn inverse(&self, x: f64, y: f64) -> ProjResult<Option<(f64, f64)>> {
        // Rows beyond the poles have no geographic counterpart
        if y.abs() > HALF_PI + TOL {
            return Ok(None);
        }
        Ok(Some((x, y.clamp(-HALF_PI, HALF_PI))))
    }
}
