//! Feature extractor variants.
//!
//! The set of variants is closed: [`FeatureExtractor`] is an enum, and a
//! descriptor's `_type` tag picks the variant once at decode time. Each
//! variant also implements [`Extractor`], which the enum dispatches to.
//!
//! - [`HeuristicMovement`]: distance and path based movement features.
//! - [`Qualifier`]: action-independent predicates about the ant's situation.
//! - [`Compositing`]: a base extractor crossed with a qualifier extractor.

mod compositing;
mod movement;
mod qualifier;

pub use compositing::{Compositing, compose_names, compose_values};
pub use movement::{HeuristicMovement, MovementFeature, moving_towards};
pub use qualifier::{Qualifier, QualifierFeature};

use ant_core::{Direction, FeatureEnv, Position};

use crate::context::EvaluationContext;
use crate::error::{ConfigError, FeatureError};
use crate::names::FeatureNames;

/// Fixed-length boolean output of one evaluation, ordered like the
/// extractor's feature names.
pub type FeatureVector = Vec<bool>;

/// Common behavior of every extractor variant.
pub trait Extractor {
    /// Declared feature names; output index `i` carries `names()[i]`.
    fn names(&self) -> &FeatureNames;

    /// Computes the feature vector for taking `action` from `location`.
    ///
    /// The returned vector always has exactly `names().len()` entries.
    fn evaluate(
        &self,
        env: &FeatureEnv<'_>,
        ctx: &mut EvaluationContext,
        location: Position,
        action: Direction,
    ) -> FeatureVector;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureExtractor {
    HeuristicMovement(HeuristicMovement),
    Qualifier(Qualifier),
    Compositing(Compositing),
}

impl FeatureExtractor {
    /// Movement extractor with the default feature list.
    pub fn moving_towards() -> Self {
        Self::HeuristicMovement(HeuristicMovement::new())
    }

    /// Qualifier extractor with the default predicate list.
    pub fn qualifying() -> Self {
        Self::Qualifier(Qualifier::new())
    }

    /// Crosses `base` with `qualifier`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateFeatureName`] if the derived names collide.
    pub fn compositing(
        base: FeatureExtractor,
        qualifier: FeatureExtractor,
    ) -> Result<Self, ConfigError> {
        Compositing::new(base, qualifier).map(Self::Compositing)
    }

    /// Descriptor tag identifying this variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::HeuristicMovement(_) => HeuristicMovement::TYPE_NAME,
            Self::Qualifier(_) => Qualifier::TYPE_NAME,
            Self::Compositing(_) => Compositing::TYPE_NAME,
        }
    }

    fn as_extractor(&self) -> &dyn Extractor {
        match self {
            Self::HeuristicMovement(inner) => inner,
            Self::Qualifier(inner) => inner,
            Self::Compositing(inner) => inner,
        }
    }

    pub fn names(&self) -> &FeatureNames {
        self.as_extractor().names()
    }

    /// Computes the feature vector for taking `action` from `location`.
    pub fn evaluate(
        &self,
        env: &FeatureEnv<'_>,
        ctx: &mut EvaluationContext,
        location: Position,
        action: Direction,
    ) -> FeatureVector {
        let values = self.as_extractor().evaluate(env, ctx, location, action);
        debug_assert_eq!(values.len(), self.num_features());
        values
    }

    /// Size of the feature vector produced by this extractor.
    pub fn num_features(&self) -> usize {
        self.names().len()
    }

    pub fn feature_names(&self) -> &[String] {
        self.names().as_slice()
    }

    /// # Errors
    ///
    /// Returns [`FeatureError::IndexOutOfRange`] if `index >= num_features()`.
    pub fn feature_name(&self, index: usize) -> Result<&str, FeatureError> {
        self.names().name(index)
    }

    /// # Errors
    ///
    /// Returns [`FeatureError::UnknownFeature`] if no feature has this name.
    pub fn feature_index(&self, name: &str) -> Result<usize, FeatureError> {
        self.names().index_of(name)
    }
}

impl Extractor for FeatureExtractor {
    fn names(&self) -> &FeatureNames {
        FeatureExtractor::names(self)
    }

    fn evaluate(
        &self,
        env: &FeatureEnv<'_>,
        ctx: &mut EvaluationContext,
        location: Position,
        action: Direction,
    ) -> FeatureVector {
        FeatureExtractor::evaluate(self, env, ctx, location, action)
    }
}

impl std::fmt::Display for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compositing(inner) => write!(
                f,
                "{}({}, {})",
                self.type_name(),
                inner.base(),
                inner.qualifier()
            ),
            _ => f.write_str(self.type_name()),
        }
    }
}
