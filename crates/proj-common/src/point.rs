//! Coordinate pair exchanged between projections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate pair.
///
/// On the geographic side `x` is longitude (lambda) and `y` is latitude
/// (phi), both in radians. On the projected side they are easting and
/// northing in the projection's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a geographic point from degrees.
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        Self::new(lon.to_radians(), lat.to_radians())
    }

    /// Longitude in radians.
    #[inline]
    pub fn lam(&self) -> f64 {
        self.x
    }

    /// Latitude in radians.
    #[inline]
    pub fn phi(&self) -> f64 {
        self.y
    }

    /// Convert a geographic point to (lon, lat) degrees.
    pub fn to_degrees(self) -> (f64, f64) {
        (self.x.to_degrees(), self.y.to_degrees())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
