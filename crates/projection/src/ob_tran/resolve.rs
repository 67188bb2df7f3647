//! Resolution of the rotated pole from one of the three parameter forms.
//!
//! Precedence:
//! 1. rotate about a center point (`o_alpha` non-zero),
//! 2. explicit pole (`o_lat_p` given),
//! 3. two points on the new equator (`lon_1`, `lat_1`, `lon_2`, `lat_2`).
//!
//! Formulas follow Snyder, "Map Projections: A Working Manual" (USGS PP 1395),
//! section 5.

use super::params::TransformParameters;
use proj_common::{ProjError, ProjResult, HALF_PI, TOL};
use tracing::debug;

/// Orientation of the rotated pole relative to the original equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationMode {
    /// Pole off the original equator; cosine and sine of its latitude.
    Oblique { cphip: f64, sphip: f64 },
    /// Pole on the original equator.
    Transverse,
}

/// Resolved pole rotation. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    lamp: f64,
    phip: f64,
    mode: RotationMode,
}

impl RotationState {
    /// Build a state from a pole position in radians.
    pub fn from_pole(lamp: f64, phip: f64) -> Self {
        let mode = if phip.abs() > TOL {
            let (sphip, cphip) = phip.sin_cos();
            RotationMode::Oblique { cphip, sphip }
        } else {
            RotationMode::Transverse
        };
        Self { lamp, phip, mode }
    }

    /// Longitude of the rotated pole (radians).
    #[inline]
    pub fn lamp(&self) -> f64 {
        self.lamp
    }

    /// Latitude of the rotated pole (radians).
    #[inline]
    pub fn phip(&self) -> f64 {
        self.phip
    }

    #[inline]
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn is_transverse(&self) -> bool {
        matches!(self.mode, RotationMode::Transverse)
    }
}

/// Resolve the rotation described by `params`.
///
/// Fails with [`ProjError::MissingInnerProjection`] before looking at any
/// angle if `o_proj` is unset.
pub fn resolve(params: &TransformParameters) -> ProjResult<RotationState> {
    if params.inner_projection().is_none() {
        return Err(ProjError::MissingInnerProjection);
    }

    let (lamp, phip) = if params.o_alpha != 0.0 {
        about_point(params.o_lon_c, params.o_lat_c, params.o_alpha)?
    } else if let Some(o_lat_p) = params.o_lat_p {
        (params.o_lon_p, o_lat_p)
    } else {
        from_equator(params.lon_1, params.lat_1, params.lon_2, params.lat_2)?
    };

    let state = RotationState::from_pole(lamp, phip);
    debug!(
        mode = ?state.mode(),
        lamp_deg = lamp.to_degrees(),
        phip_deg = phip.to_degrees(),
        "Resolved oblique rotation"
    );
    Ok(state)
}

fn about_point(lamc: f64, phic: f64, alpha: f64) -> ProjResult<(f64, f64)> {
    if (phic.abs() - HALF_PI).abs() <= TOL {
        return Err(ProjError::invalid_parameter(
            "o_lat_c",
            "center point on a pole leaves the rotation undefined",
        ));
    }

    let (sin_alpha, cos_alpha) = alpha.sin_cos();
    let lamp = lamc + (-cos_alpha).atan2(-sin_alpha * phic.sin());
    let phip = (phic.cos() * sin_alpha).asin();
    Ok((lamp, phip))
}

fn from_equator(lam1: f64, phi1: f64, lam2: f64, phi2: f64) -> ProjResult<(f64, f64)> {
    let con = phi1.abs();
    if (phi1 - phi2).abs() <= TOL {
        return Err(ProjError::invalid_parameter(
            "lat_2",
            "lat_1 and lat_2 must differ",
        ));
    }
    if con <= TOL {
        return Err(ProjError::invalid_parameter("lat_1", "must not be 0"));
    }
    if (con - HALF_PI).abs() <= TOL {
        return Err(ProjError::invalid_parameter("lat_1", "must not be ±90"));
    }
    if (phi2.abs() - HALF_PI).abs() <= TOL {
        return Err(ProjError::invalid_parameter("lat_2", "must not be ±90"));
    }

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_phi2, cos_phi2) = phi2.sin_cos();
    let lamp = (cos_phi1 * sin_phi2 * lam1.cos() - sin_phi1 * cos_phi2 * lam2.cos())
        .atan2(sin_phi1 * cos_phi2 * lam2.sin() - cos_phi1 * sin_phi2 * lam1.sin());
    let phip = (-(lamp - lam1).cos() / phi1.tan()).atan();
    Ok((lamp, phip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proj_common::ProjParams;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
    use test_utils::assert_approx_eq;

    #[test]
    fn test_explicit_pole() {
        let params = TransformParameters::with_pole(
            "moll",
            45f64.to_radians(),
            -90f64.to_radians(),
        );
        let state = resolve(&params).unwrap();

        assert_approx_eq!(state.lamp(), -FRAC_PI_2, 1e-15);
        assert_approx_eq!(state.phip(), FRAC_PI_4, 1e-15);
        match state.mode() {
            RotationMode::Oblique { cphip, sphip } => {
                assert_approx_eq!(cphip, FRAC_PI_4.cos(), 1e-15);
                assert_approx_eq!(sphip, FRAC_PI_4.sin(), 1e-15);
            }
            RotationMode::Transverse => panic!("expected oblique mode"),
        }
    }

    #[test]
    fn test_pole_on_equator_is_transverse() {
        let params = TransformParameters::with_pole("moll", 0.0, 0.0);
        let state = resolve(&params).unwrap();
        assert_eq!(state.phip(), 0.0);
        assert!(state.is_transverse());
    }

    #[test]
    fn test_two_point_equator() {
        let params = TransformParameters::with_equator("moll", 0.0, FRAC_PI_4, FRAC_PI_2, FRAC_PI_6);
        let state = resolve(&params).unwrap();

        assert_approx_eq!(state.lamp(), FRAC_PI_6, 1e-12);
        assert!(state.phip().abs() > TOL);
        assert!(matches!(state.mode(), RotationMode::Oblique { .. }));
    }

    #[test]
    fn test_two_point_pole_is_perpendicular_to_both_points() {
        let (lam1, phi1, lam2, phi2) = (0.3, 0.6, 1.9, -0.2);
        let params = TransformParameters::with_equator("moll", lam1, phi1, lam2, phi2);
        let state = resolve(&params).unwrap();

        let unit = |lam: f64, phi: f64| [phi.cos() * lam.cos(), phi.cos() * lam.sin(), phi.sin()];
        let dot = |a: [f64; 3], b: [f64; 3]| a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
        let pole = unit(state.lamp(), state.phip());

        assert_approx_eq!(dot(pole, unit(lam1, phi1)), 0.0, 1e-12);
        assert_approx_eq!(dot(pole, unit(lam2, phi2)), 0.0, 1e-12);
    }

    #[test]
    fn test_two_point_degeneracies() {
        let cases = [
            (FRAC_PI_4, FRAC_PI_4),  // identical latitudes
            (0.0, FRAC_PI_6),        // lat_1 on the equator
            (FRAC_PI_2, FRAC_PI_6),  // lat_1 on a pole
            (-FRAC_PI_2, FRAC_PI_6), // lat_1 on the south pole
            (FRAC_PI_6, -FRAC_PI_2), // lat_2 on a pole
        ];
        for (lat_1, lat_2) in cases {
            let params = TransformParameters::with_equator("moll", 0.0, lat_1, FRAC_PI_2, lat_2);
            let err = resolve(&params).unwrap_err();
            assert!(
                matches!(err, ProjError::InvalidParameter { .. }),
                "lat_1={lat_1} lat_2={lat_2} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_rotate_about_point() {
        let params = TransformParameters::with_rotation("moll", FRAC_PI_6, 0.0, 0.0);
        let state = resolve(&params).unwrap();

        assert_approx_eq!(state.lamp(), -FRAC_PI_2, 1e-12);
        assert_approx_eq!(state.phip(), FRAC_PI_6, 1e-12);
    }

    #[test]
    fn test_rotate_about_pole_rejected() {
        for lat_c in [FRAC_PI_2, -FRAC_PI_2] {
            let params = TransformParameters::with_rotation("moll", 0.2, 1.0, lat_c);
            let err = resolve(&params).unwrap_err();
            assert!(matches!(err, ProjError::InvalidParameter { ref param, .. } if param == "o_lat_c"));
        }
    }

    #[test]
    fn test_alpha_takes_precedence_over_pole() {
        let mut params = TransformParameters::with_rotation("moll", FRAC_PI_6, 0.0, 0.0);
        params.o_lat_p = Some(1.0);
        params.o_lon_p = 1.0;
        let state = resolve(&params).unwrap();
        assert_approx_eq!(state.phip(), FRAC_PI_6, 1e-12);
    }

    #[test]
    fn test_pole_takes_precedence_over_equator() {
        let mut params = TransformParameters::with_pole("moll", 0.4, 0.1);
        params.lat_1 = FRAC_PI_2; // would be rejected in the two-point form
        let state = resolve(&params).unwrap();
        assert_approx_eq!(state.phip(), 0.4, 1e-15);
        assert_approx_eq!(state.lamp(), 0.1, 1e-15);
    }

    #[test]
    fn test_explicit_zero_pole_overrides_two_point_keys() {
        let two_point = "+proj=ob_tran +o_proj=moll +lon_1=0 +lat_1=45 +lon_2=90 +lat_2=30";

        let params = ProjParams::parse(&format!("{two_point} +o_lat_p=0")).unwrap();
        let state = resolve(&TransformParameters::from_params(&params).unwrap()).unwrap();
        assert!(state.is_transverse());
        assert_eq!(state.phip(), 0.0);
        assert_eq!(state.lamp(), 0.0);

        // Without o_lat_p the same keys describe an oblique equator
        let params = ProjParams::parse(two_point).unwrap();
        let state = resolve(&TransformParameters::from_params(&params).unwrap()).unwrap();
        assert!(!state.is_transverse());
        assert_approx_eq!(state.lamp(), FRAC_PI_6, 1e-12);
    }

    #[test]
    fn test_missing_inner_projection_checked_first() {
        // Degenerate geometry too, but the missing projection wins
        let mut params = TransformParameters::with_equator("moll", 0.0, FRAC_PI_2, 0.0, FRAC_PI_2);
        params.o_proj = None;
        assert_eq!(resolve(&params).unwrap_err(), ProjError::MissingInnerProjection);

        params.o_proj = Some("not_set".into());
        assert_eq!(resolve(&params).unwrap_err(), ProjError::MissingInnerProjection);
    }

    #[test]
    fn test_state_is_copy_and_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<RotationState>();
    }
}
