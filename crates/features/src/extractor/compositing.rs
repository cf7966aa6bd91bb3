//! Cross-product composition of two extractors.
//!
//! With a base of `n` features and a qualifier of `m` features the composite
//! emits `n + n*m` features:
//!
//! ```text
//! f[0]           .. f[n-1]          base[0] .. base[n-1]
//! f[n + b*m + q]                    base[b] AND qual[q]   (b outer, q inner)
//! ```
//!
//! Names and values are produced by the same traversal ([`cross`]), which is
//! what keeps index `i` of the vector describing name `i`.

use ant_core::{Direction, FeatureEnv, Position};

use super::{Extractor, FeatureExtractor, FeatureVector};
use crate::context::EvaluationContext;
use crate::error::ConfigError;
use crate::names::FeatureNames;

/// Joins a base and qualifier feature name.
const AND: &str = " AND ";

/// Base-major, qualifier-minor traversal shared by names and values.
fn cross<'a, T, R>(
    base: &'a [T],
    qualifier: &'a [T],
    combine: impl Fn(&T, &T) -> R + 'a,
) -> impl Iterator<Item = R> + 'a {
    base.iter()
        .flat_map(move |b| qualifier.iter().map(move |q| (b, q)))
        .map(move |(b, q)| combine(b, q))
}

/// Composite names: base names, then every `"<base> AND <qualifier>"` pair.
pub fn compose_names(base: &[String], qualifier: &[String]) -> Vec<String> {
    base.iter()
        .cloned()
        .chain(cross(base, qualifier, |b, q| format!("{b}{AND}{q}")))
        .collect()
}

/// Composite values for one base vector and one qualifier vector.
pub fn compose_values(base: &[bool], qualifier: &[bool]) -> FeatureVector {
    base.iter()
        .copied()
        .chain(cross(base, qualifier, |b, q| *b && *q))
        .collect()
}

/// Base extractor crossed with a qualifier extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compositing {
    base: Box<FeatureExtractor>,
    qualifier: Box<FeatureExtractor>,
    names: FeatureNames,
}

impl Compositing {
    pub const TYPE_NAME: &'static str = "Compositing";

    /// Takes ownership of both children and derives the composite names once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateFeatureName`] when a derived name
    /// collides with another one, which happens when the same qualifier is
    /// applied twice along a nesting chain.
    pub fn new(base: FeatureExtractor, qualifier: FeatureExtractor) -> Result<Self, ConfigError> {
        let names = FeatureNames::new(compose_names(
            base.feature_names(),
            qualifier.feature_names(),
        ))?;
        Ok(Self {
            base: Box::new(base),
            qualifier: Box::new(qualifier),
            names,
        })
    }

    pub fn base(&self) -> &FeatureExtractor {
        &self.base
    }

    pub fn qualifier(&self) -> &FeatureExtractor {
        &self.qualifier
    }
}

impl Extractor for Compositing {
    fn names(&self) -> &FeatureNames {
        &self.names
    }

    fn evaluate(
        &self,
        env: &FeatureEnv<'_>,
        ctx: &mut EvaluationContext,
        location: Position,
        action: Direction,
    ) -> FeatureVector {
        let mut values = self.base.evaluate(env, ctx, location, action);

        // Children are recomputed for the products rather than reused.
        let base = self.base.evaluate(env, ctx, location, action);
        let qualifier = self.qualifier.evaluate(env, ctx, location, action);
        values.extend(cross(&base, &qualifier, |b, q| *b && *q));

        tracing::trace!(
            extractor = Self::TYPE_NAME,
            active = values.iter().filter(|v| **v).count(),
            total = values.len(),
            "composited features"
        );
        values
    }
}
