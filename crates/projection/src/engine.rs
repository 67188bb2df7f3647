//! Projection trait and the generic spherical projection engine.
//!
//! Every concrete projection is split into two layers:
//! - a [`SphericalCore`] holding the unit-sphere math for one projection,
//! - a [`ProjectionEngine`] applying the standard parameters around it:
//!   central meridian (`lon_0`), sphere radius (`R`) and false
//!   easting/northing (`x_0`, `y_0`).

use proj_common::{normalize_longitude, Point, ProjError, ProjParams, ProjResult, HALF_PI, TOL};
use std::fmt;
use std::sync::Arc;

/// Semi-major axis of the WGS84 ellipsoid, used as the default sphere radius.
pub const WGS84_SEMI_MAJOR: f64 = 6378137.0;

/// A ready-to-use projection instance.
///
/// `forward` maps geographic `(lambda, phi)` in radians to projected
/// coordinates. `inverse` maps back; `Ok(None)` means the projected point
/// has no geographic counterpart (the "point at infinity").
pub trait Projection: Send + Sync + fmt::Debug {
    /// Registry name of this projection.
    fn name(&self) -> &str;

    fn forward(&self, lp: Point) -> ProjResult<Point>;

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>>;

    /// Projected coordinates are angles in radians rather than lengths.
    fn is_geographic(&self) -> bool {
        false
    }
}

impl<P: Projection + ?Sized> Projection for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        (**self).forward(lp)
    }

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>> {
        (**self).inverse(xy)
    }

    fn is_geographic(&self) -> bool {
        (**self).is_geographic()
    }
}

impl<P: Projection + ?Sized> Projection for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        (**self).forward(lp)
    }

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>> {
        (**self).inverse(xy)
    }

    fn is_geographic(&self) -> bool {
        (**self).is_geographic()
    }
}

/// Unit-sphere projection math, centred on longitude 0.
pub trait SphericalCore: Send + Sync + fmt::Debug {
    const NAME: &'static str;

    /// Angular output: radius and false origin are not applied.
    const GEOGRAPHIC: bool = false;

    fn forward(&self, lam: f64, phi: f64) -> ProjResult<(f64, f64)>;

    fn inverse(&self, x: f64, y: f64) -> ProjResult<Option<(f64, f64)>>;
}

/// A spherical core bound to its standard parameters.
#[derive(Debug, Clone)]
pub struct ProjectionEngine<C> {
    core: C,
    /// Central meridian (radians)
    pub lon_0: f64,
    /// False easting (metres)
    pub x_0: f64,
    /// False northing (metres)
    pub y_0: f64,
    /// Sphere radius (metres)
    pub radius: f64,
}

impl<C: SphericalCore> ProjectionEngine<C> {
    pub fn new(core: C) -> Self {
        Self {
            core,
            lon_0: 0.0,
            x_0: 0.0,
            y_0: 0.0,
            radius: WGS84_SEMI_MAJOR,
        }
    }

    /// Read `lon_0`, `x_0`, `y_0` and `R` (falling back to `a`) from `params`.
    pub fn from_params(core: C, params: &ProjParams) -> ProjResult<Self> {
        let radius = match params.number("R")? {
            Some(r) => r,
            None => params.number("a")?.unwrap_or(WGS84_SEMI_MAJOR),
        };
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ProjError::invalid_parameter(
                "R",
                format!("sphere radius must be positive, got {radius}"),
            ));
        }

        Ok(Self {
            core,
            lon_0: params.angle_or_zero("lon_0")?,
            x_0: params.number("x_0")?.unwrap_or(0.0),
            y_0: params.number("y_0")?.unwrap_or(0.0),
            radius,
        })
    }

    pub fn core(&self) -> &C {
        &self.core
    }
}

impl<C: SphericalCore> Projection for ProjectionEngine<C> {
    fn name(&self) -> &str {
        C::NAME
    }

    fn is_geographic(&self) -> bool {
        C::GEOGRAPHIC
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        if !lp.is_finite() {
            return Err(ProjError::InvalidCoordinate(format!("{} forward of {lp}", C::NAME)));
        }
        if lp.phi().abs() > HALF_PI + TOL {
            return Err(ProjError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                lp.phi().to_degrees()
            )));
        }

        let lam = normalize_longitude(lp.lam() - self.lon_0);
        let phi = lp.phi().clamp(-HALF_PI, HALF_PI);
        let (x, y) = self.core.forward(lam, phi)?;

        if C::GEOGRAPHIC {
            Ok(Point::new(x, y))
        } else {
            Ok(Point::new(
                self.radius * x + self.x_0,
                self.radius * y + self.y_0,
            ))
        }
    }

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>> {
        if !xy.is_finite() {
            return Err(ProjError::InvalidCoordinate(format!("{} inverse of {xy}", C::NAME)));
        }

        let (x, y) = if C::GEOGRAPHIC {
            (xy.x, xy.y)
        } else {
            ((xy.x - self.x_0) / self.radius, (xy.y - self.y_0) / self.radius)
        };

        Ok(self
            .core
            .inverse(x, y)?
            .map(|(lam, phi)| Point::new(normalize_longitude(lam + self.lon_0), phi)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equirectangular::Equirectangular;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_defaults() {
        let engine = ProjectionEngine::new(Equirectangular);
        assert_eq!(engine.radius, WGS84_SEMI_MAJOR);
        assert_eq!(engine.lon_0, 0.0);
        assert_eq!(engine.name(), "eqc");
        assert!(!engine.is_geographic());
    }

    #[test]
    fn test_offsets_applied() {
        let params = ProjParams::parse("+proj=eqc +R=1 +x_0=10 +y_0=-5 +lon_0=90").unwrap();
        let engine = ProjectionEngine::from_params(Equirectangular, &params).unwrap();

        let xy = engine.forward(Point::from_degrees(90.0, 0.0)).unwrap();
        assert_approx_eq!(xy.x, 10.0, 1e-12);
        assert_approx_eq!(xy.y, -5.0, 1e-12);

        let lp = engine.inverse(xy).unwrap().unwrap();
        assert_approx_eq!(lp.lam(), std::f64::consts::FRAC_PI_2, 1e-12);
        assert_approx_eq!(lp.phi(), 0.0, 1e-12);
    }

    #[test]
    fn test_radius_falls_back_to_a() {
        let params = ProjParams::parse("+proj=eqc +a=2").unwrap();
        let engine = ProjectionEngine::from_params(Equirectangular, &params).unwrap();
        assert_eq!(engine.radius, 2.0);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let params = ProjParams::parse("+proj=eqc +R=0").unwrap();
        let err = ProjectionEngine::from_params(Equirectangular, &params).unwrap_err();
        assert!(matches!(err, ProjError::InvalidParameter { ref param, .. } if param == "R"));
    }

    #[test]
    fn test_rejects_non_finite_and_out_of_range() {
        let engine = ProjectionEngine::new(Equirectangular);
        assert!(matches!(
            engine.forward(Point::new(f64::NAN, 0.0)),
            Err(ProjError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            engine.forward(Point::new(0.0, 2.0)),
            Err(ProjError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            engine.inverse(Point::new(f64::INFINITY, 0.0)),
            Err(ProjError::InvalidCoordinate(_))
        ));
    }
}
