//! Composable boolean feature extractors for ant movement decisions.
//!
//! An extractor turns a `(location, action)` pair into a fixed-length vector
//! of named booleans such as "moving toward the closest food" or "enemy
//! nearby". Three variants exist:
//!
//! - `MovingTowards` ([`HeuristicMovement`]) judges where an action leads.
//! - `Qualifying` ([`Qualifier`]) describes the ant's surroundings.
//! - `Compositing` ([`Compositing`]) crosses a base extractor with a
//!   qualifier through logical AND.
//!
//! Extractors are immutable once built and are described by JSON descriptors
//! (see [`codec`]). All per-turn mutable state lives in an
//! [`EvaluationContext`], which caches path searches and bounds how many run
//! per decision cycle.
//!
//! ```no_run
//! use ant_core::{Direction, FeatureEnv, MapDimensions, Position, WorldSnapshot};
//! use ant_features::{EvaluationContext, ExtractorConfig, FeatureExtractor};
//!
//! let config = ExtractorConfig::from_json_str(
//!     r#"{"_type":"Compositing","base_f":{"_type":"MovingTowards"},"qual_f":{"_type":"Qualifying"}}"#,
//! )?;
//! let extractor = FeatureExtractor::from_config(&config)?;
//!
//! let world = WorldSnapshot::new(MapDimensions::new(32, 32)).with_ant((0, 0));
//! let env = FeatureEnv::uniform(&world);
//! let mut ctx = EvaluationContext::new();
//! let values = extractor.evaluate(&env, &mut ctx, Position::ORIGIN, Direction::East);
//! assert_eq!(values.len(), extractor.num_features());
//! # Ok::<(), ant_features::ConfigError>(())
//! ```

pub mod codec;
pub mod context;
pub mod error;
pub mod extractor;
pub mod names;

pub use codec::{
    ExtractorConfig, decode, decode_value, encode, load_extractor, save_extractor,
};
pub use context::{CycleStats, EvaluationContext};
pub use error::{ConfigError, FeatureError, Result};
pub use extractor::{
    Compositing, Extractor, FeatureExtractor, FeatureVector, HeuristicMovement, MovementFeature,
    Qualifier, QualifierFeature, compose_names, compose_values, moving_towards,
};
pub use names::FeatureNames;
