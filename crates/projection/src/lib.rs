//! Spherical map projections and the General Oblique Transformation.
//!
//! Each projection is a unit-sphere core wrapped in a [`ProjectionEngine`].
//! [`ob_tran`] rotates the graticule to an arbitrary pole before handing
//! coordinates to any other registered projection.

pub mod batch;
pub mod engine;
pub mod equirectangular;
pub mod geographic;
pub mod mercator;
pub mod mollweide;
pub mod ob_tran;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{Projection, ProjectionEngine, SphericalCore, WGS84_SEMI_MAJOR};
pub use ob_tran::{ObliqueTransformation, RotationState, RotationMode, TransformParameters};
pub use registry::ProjectionRegistry;
