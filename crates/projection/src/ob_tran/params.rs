//! Typed view of the `ob_tran` parameters.

use proj_common::{ProjParams, ProjResult};

/// Value of `o_proj` that counts as "not set".
pub const NOT_SET: &str = "not_set";

/// Parameters of the General Oblique Transformation, angles in radians.
///
/// Absent angles default to 0. `o_lat_p` stays optional because giving it
/// explicitly selects the pole form even when its value is 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformParameters {
    /// Inner projection name
    pub o_proj: Option<String>,

    /// Latitude of the unrotated North pole in the rotated frame
    pub o_lat_p: Option<f64>,
    /// Longitude of the unrotated North pole in the rotated frame
    pub o_lon_p: f64,

    /// Rotation angle about the center point
    pub o_alpha: f64,
    pub o_lon_c: f64,
    pub o_lat_c: f64,

    /// Two points on the new equator
    pub lon_1: f64,
    pub lat_1: f64,
    pub lon_2: f64,
    pub lat_2: f64,
}

impl TransformParameters {
    pub fn from_params(params: &ProjParams) -> ProjResult<Self> {
        Ok(Self {
            o_proj: params.text("o_proj").map(str::to_string),
            o_lat_p: params.angle("o_lat_p")?,
            o_lon_p: params.angle_or_zero("o_lon_p")?,
            o_alpha: params.angle_or_zero("o_alpha")?,
            o_lon_c: params.angle_or_zero("o_lon_c")?,
            o_lat_c: params.angle_or_zero("o_lat_c")?,
            lon_1: params.angle_or_zero("lon_1")?,
            lat_1: params.angle_or_zero("lat_1")?,
            lon_2: params.angle_or_zero("lon_2")?,
            lat_2: params.angle_or_zero("lat_2")?,
        })
    }

    /// Builder for the explicit-pole form.
    pub fn with_pole(o_proj: &str, o_lat_p: f64, o_lon_p: f64) -> Self {
        Self {
            o_proj: Some(o_proj.to_string()),
            o_lat_p: Some(o_lat_p),
            o_lon_p,
            ..Self::default()
        }
    }

    /// Builder for the rotate-about-point form.
    pub fn with_rotation(o_proj: &str, o_alpha: f64, o_lon_c: f64, o_lat_c: f64) -> Self {
        Self {
            o_proj: Some(o_proj.to_string()),
            o_alpha,
            o_lon_c,
            o_lat_c,
            ..Self::default()
        }
    }

    /// Builder for the two-point equator form.
    pub fn with_equator(o_proj: &str, lon_1: f64, lat_1: f64, lon_2: f64, lat_2: f64) -> Self {
        Self {
            o_proj: Some(o_proj.to_string()),
            lon_1,
            lat_1,
            lon_2,
            lat_2,
            ..Self::default()
        }
    }

    /// The inner projection name, unless unset.
    ///
    /// An empty value and the literal `not_set` both count as unset.
    pub fn inner_projection(&self) -> Option<&str> {
        self.o_proj
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != NOT_SET)
    }
}
