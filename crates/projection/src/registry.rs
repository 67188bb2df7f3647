//! Projection lookup by name.

use crate::engine::{Projection, ProjectionEngine, SphericalCore};
use crate::equirectangular::Equirectangular;
use crate::geographic::LongLat;
use crate::mercator::Mercator;
use crate::mollweide::Mollweide;
use crate::ob_tran::{self, ObliqueTransformation};
use proj_common::{ProjError, ProjParams, ProjResult};
use std::collections::HashMap;

/// Builds a projection instance from its parameters.
///
/// The registry is passed along so projections wrapping other projections
/// can look those up too.
pub type Constructor = fn(&ProjParams, &ProjectionRegistry) -> ProjResult<Box<dyn Projection>>;

/// Table of projection constructors keyed by name and alias.
#[derive(Clone, Default)]
pub struct ProjectionRegistry {
    constructors: HashMap<String, Constructor>,
}

impl std::fmt::Debug for ProjectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectionRegistry")
            .field("names", &self.names())
            .finish()
    }
}

fn spherical<C: SphericalCore + Default + 'static>(
    params: &ProjParams,
    _registry: &ProjectionRegistry,
) -> ProjResult<Box<dyn Projection>> {
    Ok(Box::new(ProjectionEngine::from_params(C::default(), params)?))
}

fn oblique(params: &ProjParams, registry: &ProjectionRegistry) -> ProjResult<Box<dyn Projection>> {
    Ok(Box::new(ObliqueTransformation::new(params, registry)?))
}

impl ProjectionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in projection.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(&["longlat", "latlong", "lonlat", "latlon"], spherical::<LongLat>);
        registry.register(&["eqc"], spherical::<Equirectangular>);
        registry.register(&["merc"], spherical::<Mercator>);
        registry.register(&["moll"], spherical::<Mollweide>);
        registry.register(&ob_tran::NAMES, oblique);
        registry
    }

    /// Register `constructor` under every name in `names`.
    pub fn register(&mut self, names: &[&str], constructor: Constructor) {
        for name in names {
            self.constructors.insert((*name).to_string(), constructor);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the projection named by the `proj` parameter.
    pub fn create(&self, params: &ProjParams) -> ProjResult<Box<dyn Projection>> {
        let name = params
            .text("proj")
            .ok_or_else(|| ProjError::MissingParameter("proj".to_string()))?;
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| ProjError::UnknownProjection(name.to_string()))?;
        constructor(params, self)
    }

    /// Parse `definition` and build the projection it names.
    pub fn create_from_str(&self, definition: &str) -> ProjResult<Box<dyn Projection>> {
        self.create(&ProjParams::parse(definition)?)
    }
}
