//! Domain types and collaborator contracts for ant feature extraction.
//!
//! `ant-core` defines the grid vocabulary ([`Position`], [`Direction`],
//! [`EntityKind`]) and the read-only oracles a bot hands to the extractors:
//! world geometry, visit memory and path search. [`WorldSnapshot`] implements
//! all of them in memory for tests and offline tools.
pub mod config;
pub mod env;
pub mod state;

pub use config::FeatureRules;
pub use env::{
    FeatureEnv, MapDimensions, PathOracle, SnapshotError, VisitOracle, WorldOracle, WorldSnapshot,
    closest,
};
pub use state::{Direction, EntityKind, Position};
