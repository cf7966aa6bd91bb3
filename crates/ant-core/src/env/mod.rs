//! Traits describing the read-only collaborators of feature extraction.
//!
//! World geometry, agent memory and path search are owned by the bot, not by
//! this workspace. The [`FeatureEnv`] aggregate bundles them so extractors can
//! reach everything they need without coupling to concrete implementations.
mod agent;
mod error;
mod snapshot;
mod world;

pub use agent::{PathOracle, VisitOracle};
pub use error::SnapshotError;
pub use snapshot::{MapDimensions, WorldSnapshot};
pub use world::{WorldOracle, closest};

/// Aggregates the oracles consulted during one evaluation.
#[derive(Clone, Copy)]
pub struct FeatureEnv<'a> {
    world: &'a dyn WorldOracle,
    visits: &'a dyn VisitOracle,
    paths: &'a dyn PathOracle,
}

impl<'a> FeatureEnv<'a> {
    pub fn new(
        world: &'a dyn WorldOracle,
        visits: &'a dyn VisitOracle,
        paths: &'a dyn PathOracle,
    ) -> Self {
        Self {
            world,
            visits,
            paths,
        }
    }

    /// Builds an environment from a single value implementing every oracle.
    pub fn uniform<T>(oracles: &'a T) -> Self
    where
        T: WorldOracle + VisitOracle + PathOracle,
    {
        Self::new(oracles, oracles, oracles)
    }

    /// Replaces the path oracle, keeping the other two.
    pub fn with_paths(self, paths: &'a dyn PathOracle) -> Self {
        Self { paths, ..self }
    }

    pub fn world(&self) -> &'a dyn WorldOracle {
        self.world
    }

    pub fn visits(&self) -> &'a dyn VisitOracle {
        self.visits
    }

    pub fn paths(&self) -> &'a dyn PathOracle {
        self.paths
    }
}

impl std::fmt::Debug for FeatureEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureEnv").finish_non_exhaustive()
    }
}
