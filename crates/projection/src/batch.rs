//! Parallel transformation of many points with one shared projection.
//!
//! Projections are immutable once built, so a single instance is shared by
//! reference across rayon workers. Each point gets its own result: one
//! failing point does not abort the batch.

use crate::engine::Projection;
use proj_common::{Point, ProjResult};
use rayon::prelude::*;
use tracing::debug;

/// Below this many points the batch runs on the calling thread.
const PARALLEL_THRESHOLD: usize = 1024;

/// Forward-project every point, preserving order.
pub fn forward_all(proj: &dyn Projection, points: &[Point]) -> Vec<ProjResult<Point>> {
    debug!(count = points.len(), projection = proj.name(), "Batch forward");
    if points.len() < PARALLEL_THRESHOLD {
        return points.iter().map(|p| proj.forward(*p)).collect();
    }
    points.par_iter().map(|p| proj.forward(*p)).collect()
}

/// Inverse-project every point, preserving order.
pub fn inverse_all(proj: &dyn Projection, points: &[Point]) -> Vec<ProjResult<Option<Point>>> {
    debug!(count = points.len(), projection = proj.name(), "Batch inverse");
    if points.len() < PARALLEL_THRESHOLD {
        return points.iter().map(|p| proj.inverse(*p)).collect();
    }
    points.par_iter().map(|p| proj.inverse(*p)).collect()
}

/// Counts of a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub ok: usize,
    pub undefined: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn of_forward(results: &[ProjResult<Point>]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result {
                Ok(_) => summary.ok += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn of_inverse(results: &[ProjResult<Option<Point>>]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result {
                Ok(Some(_)) => summary.ok += 1,
                Ok(None) => summary.undefined += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.ok + self.undefined + self.failed
    }
}
