//! Forward and inverse rotation of the graticule.
//!
//! With the geographic unit vector `(x, y, z)`, the rotation is a turn
//! about the y axis by `π/2 - phip` followed by a shift of `lamp` in
//! longitude. Transverse mode is the `phip = 0` case.

use super::resolve::{RotationMode, RotationState};
use crate::engine::Projection;
use proj_common::angle::asin_safe;
use proj_common::{normalize_longitude, Point, ProjError, ProjResult};
use tracing::trace;

/// Rotate a geographic point into the rotated frame.
pub fn rotate(state: &RotationState, lp: Point) -> Point {
    let lam = lp.lam();
    let (sinphi, cosphi) = lp.phi().sin_cos();
    let (sinlam, coslam) = lam.sin_cos();

    match state.mode() {
        RotationMode::Oblique { cphip, sphip } => {
            // Snyder (5-8b) and (5-7)
            let lam = normalize_longitude(
                (cosphi * sinlam).atan2(sphip * cosphi * coslam + cphip * sinphi) + state.lamp(),
            );
            let phi = asin_safe(sphip * sinphi - cphip * cosphi * coslam);
            Point::new(lam, phi)
        }
        RotationMode::Transverse => {
            let lam = normalize_longitude((cosphi * sinlam).atan2(sinphi) + state.lamp());
            let phi = asin_safe(-cosphi * coslam);
            Point::new(lam, phi)
        }
    }
}

/// Rotate a point of the rotated frame back to geographic coordinates.
pub fn unrotate(state: &RotationState, lp: Point) -> Point {
    let t = lp.lam() - state.lamp();
    let (sinphi, cosphi) = lp.phi().sin_cos();
    let (sint, cost) = t.sin_cos();

    match state.mode() {
        RotationMode::Oblique { cphip, sphip } => {
            // Snyder (5-9) and (5-10b)
            let phi = asin_safe(sphip * sinphi + cphip * cosphi * cost);
            let lam = (cosphi * sint).atan2(sphip * cosphi * cost - cphip * sinphi);
            Point::new(lam, phi)
        }
        RotationMode::Transverse => {
            let phi = asin_safe(cosphi * cost);
            let lam = (cosphi * sint).atan2(-sinphi);
            Point::new(lam, phi)
        }
    }
}

/// Rotate `lp`, then project it with `inner`.
pub fn forward(state: &RotationState, inner: &dyn Projection, lp: Point) -> ProjResult<Point> {
    if !lp.is_finite() {
        return Err(ProjError::InvalidCoordinate(format!("ob_tran forward of {lp}")));
    }
    let rotated = rotate(state, lp);
    trace!(input = %lp, rotated = %rotated, inner = inner.name(), "ob_tran forward");
    inner.forward(rotated)
}

/// Invert `xy` with `inner`, then rotate back.
///
/// `Ok(None)` from the inner projection is passed through untouched.
pub fn inverse(
    state: &RotationState,
    inner: &dyn Projection,
    xy: Point,
) -> ProjResult<Option<Point>> {
    let Some(rotated) = inner.inverse(xy)? else {
        trace!(input = %xy, inner = inner.name(), "ob_tran inverse has no geographic point");
        return Ok(None);
    };
    Ok(Some(unrotate(state, rotated)))
}
