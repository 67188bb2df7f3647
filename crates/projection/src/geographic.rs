//! Geographic pass-through ("longlat").
//!
//! Used as the inner projection of rotated-pole grids: the output is the
//! rotated longitude/latitude itself, in radians.

use crate::engine::SphericalCore;
use proj_common::ProjResult;

/// Identity on longitude/latitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongLat;

impl SphericalCore for LongLat {
    const NAME: &'static str = "longlat";
    const GEOGRAPHIC: bool = true;

    fn forward(&self, lam: f64, phi: f64) -> ProjResult<(f64, f64)> {
        Ok((lam, phi))
    }

    fn inverse(&self, x: f64, y: f64) -> ProjResult<Option<(f64, f64)>> {
        Ok(Some((x, y)))
    }
}
