//! Stub projections for unit tests.

use crate::engine::Projection;
use proj_common::{Point, ProjResult};
use std::sync::Mutex;

/// Returns its input unchanged in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjection;

impl Projection for IdentityProjection {
    fn name(&self) -> &str {
        "identity"
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        Ok(lp)
    }

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>> {
        Ok(Some(xy))
    }
}

/// Identity that records every point it is handed.
#[derive(Debug, Default)]
pub struct RecordingProjection {
    forward_inputs: Mutex<Vec<Point>>,
    inverse_inputs: Mutex<Vec<Point>>,
}

impl RecordingProjection {
    pub fn forward_inputs(&self) -> Vec<Point> {
        self.forward_inputs.lock().unwrap().clone()
    }

    pub fn inverse_inputs(&self) -> Vec<Point> {
        self.inverse_inputs.lock().unwrap().clone()
    }
}

impl Projection for RecordingProjection {
    fn name(&self) -> &str {
        "recording"
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        self.forward_inputs.lock().unwrap().push(lp);
        Ok(lp)
    }

    fn inverse(&self, xy: Point) -> ProjResult<Option<Point>> {
        self.inverse_inputs.lock().unwrap().push(xy);
        Ok(Some(xy))
    }
}

/// Inverse never has a geographic answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedInverse;

impl Projection for UndefinedInverse {
    fn name(&self) -> &str {
        "undefined"
    }

    fn forward(&self, lp: Point) -> ProjResult<Point> {
        Ok(lp)
    }

    fn inverse(&self, _xy: Point) -> ProjResult<Option<Point>> {
        Ok(None)
    }
}
