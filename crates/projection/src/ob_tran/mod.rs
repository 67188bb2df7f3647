//! General Oblique Transformation (`ob_tran`).
//!
//! Moves the pole of the graticule to an arbitrary position, then evaluates
//! any other projection (`o_proj`) in the rotated frame. The rotation is
//! resolved once, at construction, into an immutable [`RotationState`].
//!
//! ```text
//! +proj=ob_tran +o_proj=moll +o_lat_p=45 +o_lon_p=-90 +lon_0=60
//! ```

mod params;
mod resolve;
mod rotate;

pub use params::{TransformParameters, NOT_SET};
pub use resolve::{resolve, RotationMode, RotationState};
pub use rotate::{forward, inverse, rotate, unrotate};

use crate::engine::Projection;
use crate::registry::ProjectionRegistry;
use proj_common::{ParamValue, Point, ProjError, ProjParams, ProjResult};
use tracing::debug;

/// Names the transformation is registered under.
pub const NAMES: [&str; 4] = [
    "ob_tran",
    "General Oblique Transformation",
    "General_Oblique_Transformation",
    "obtran",
];

/// Whether `name` refers to this transformation.
pub fn is_ob_tran(name: &str) -> bool {
    NAMES.contains(&name)
}

/// A resolved rotation bound to its inner projection.
#[derive(Debug)]
pub struct ObliqueTransformation {
    state: RotationState,
    inner: Box<dyn Projection>,
}

impl ObliqueTransformation {
    /// Build from a full `+proj=ob_tran ...` parameter set.
    ///
    /// The inner projection receives the same parameters with `proj`
    /// replaced by `o_proj`, so `lon_0`, `x_0`, `y_0` and `R` reach it
    /// unchanged.
    pub fn new(params: &ProjParams, registry: &ProjectionRegistry) -> ProjResult<Self> {
        let transform = TransformParameters::from_params(params)?;
        let state = resolve(&transform)?;

        let inner_name = transform
            .inner_projection()
            .ok_or(ProjError::MissingInnerProjection)?;
        if is_ob_tran(inner_name) {
            return Err(ProjError::invalid_parameter(
                "o_proj",
                "ob_tran cannot rotate another ob_tran",
            ));
        }

        let inner_params = params
            .clone()
            .with("proj", ParamValue::Text(inner_name.to_string()));
        debug!(inner = %inner_params, "Building inner projection");
        let inner = registry.create(&inner_params)?;

        Ok(Self { state, inner })
    }

    /// Bind an already constructed inner projection.
    pub fn with_inner(
        transform: &TransformParameters,
        inner: Box<dyn Projection>,
    ) -> ProjResult<Self> {
        let state = resolve(transform)?;
        Ok(Self { state, inner })
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn inner(&self) -> &dyn Projection {
        self.inner.as_ref()
    }
}

impl Projection for ObliqueTransformation {
    fn name(&self) -> &str {
        NAMES[0]
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        forward(&self.state, self.inner.as_ref(), lp)
    }

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>> {
        inverse(&self.state, self.inner.as_ref(), xy)
    }

    fn is_geographic(&self) -> bool {
        self.inner.is_geographic()
    }
}
