//! Angle constants and helpers, all in radians.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Half of pi, the latitude of the poles.
pub const HALF_PI: f64 = FRAC_PI_2;

/// Tolerance used for degeneracy checks.
pub const TOL: f64 = 1e-10;

/// Wrap a longitude into `(-π, π]`.
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon > -PI && lon <= PI {
        return lon;
    }
    let wrapped = lon - TAU * ((lon + PI) / TAU).floor();
    // floor() puts odd multiples of π at -π; the range is open on that side
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// `asin` with the argument clamped to `[-1, 1]`.
///
/// Rounding can push products of sines and cosines slightly past 1, which
/// would otherwise produce NaN right at the poles.
#[inline]
pub fn asin_safe(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).asin()
}

/// Parse an angle in degrees into radians.
///
/// A trailing `r` marks a value that is already in radians.
pub fn parse_angle(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Some(rad) = s.strip_suffix('r').or_else(|| s.strip_suffix('R')) {
        return rad.trim().parse::<f64>().ok();
    }
    s.parse::<f64>().ok().map(f64::to_radians)
}
