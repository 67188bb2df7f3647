//! Common types and utilities shared by the projection crates and services.

pub mod angle;
pub mod error;
pub mod params;
pub mod point;

pub use angle::{normalize_longitude, HALF_PI, TOL};
pub use error::{ProjError, ProjResult};
pub use params::{ParamValue, ProjParams};
pub use point::Point;
