//! Qualifier features: static predicates about the ant's surroundings.
//!
//! Qualifiers ignore the candidate action. They are meant to be crossed with
//! movement features by [`super::Compositing`], e.g. "moving toward food AND
//! enemy nearby".

use ant_core::{Direction, EntityKind, FeatureEnv, FeatureRules, Position, WorldOracle, closest};
use serde::{Deserialize, Serialize};

use super::{Extractor, FeatureVector, moving_towards};
use crate::context::EvaluationContext;
use crate::error::ConfigError;
use crate::names::FeatureNames;

/// One declarable qualifier predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifierFeature {
    /// Nearest enemy within [`FeatureRules::NEARBY_DISTANCE`].
    EnemyNearby,
    /// Nearest friendly ant within [`FeatureRules::NEARBY_DISTANCE`].
    FriendNearby,
    /// Nearest friendly ant within [`FeatureRules::CLOSE_DISTANCE`].
    FriendClose,
    /// Colony holds more than [`FeatureRules::CROWD_THRESHOLD`] ants.
    #[serde(rename = "more_than_100_ants")]
    MoreThan100Ants,
    /// The nearest enemy is strictly closer to the nearest food than we are.
    EnemyNearerToFood,
    /// Food around our nearest hill: `0` means none, `n` means at least `n`.
    FoodAtHill(u32),
    /// Friendly ants around our nearest hill: `0` means none, `n` means at least `n`.
    AntsDefending(u32),
}

impl QualifierFeature {
    pub const DEFAULT: [QualifierFeature; 5] = [
        QualifierFeature::EnemyNearby,
        QualifierFeature::FriendNearby,
        QualifierFeature::FriendClose,
        QualifierFeature::MoreThan100Ants,
        QualifierFeature::EnemyNearerToFood,
    ];

    const FOOD_THRESHOLDS: [u32; 10] = [0, 1, 2, 3, 4, 5, 7, 8, 9, 10];
    const DEFENDER_THRESHOLDS: [u32; 6] = [0, 1, 2, 3, 4, 5];

    /// Default predicates followed by the hill food and defender thresholds.
    pub fn extended() -> Vec<QualifierFeature> {
        Self::DEFAULT
            .into_iter()
            .chain(Self::FOOD_THRESHOLDS.into_iter().map(Self::FoodAtHill))
            .chain(Self::DEFENDER_THRESHOLDS.into_iter().map(Self::AntsDefending))
            .collect()
    }

    pub fn label(self) -> String {
        match self {
            Self::EnemyNearby => "Enemy Nearby".to_owned(),
            Self::FriendNearby => "Friend Nearby".to_owned(),
            Self::FriendClose => "Friend close".to_owned(),
            Self::MoreThan100Ants => "More than 100 ants".to_owned(),
            Self::EnemyNearerToFood => "Enemy is nearer to nearest food".to_owned(),
            Self::FoodAtHill(0) => "No food in Hill".to_owned(),
            Self::FoodAtHill(n) => format!(">={n} food in Hill"),
            Self::AntsDefending(0) => "No ant defending".to_owned(),
            Self::AntsDefending(n) => format!(">={n} ant defending"),
        }
    }

    const fn needs_hill(self) -> bool {
        matches!(self, Self::FoodAtHill(_) | Self::AntsDefending(_))
    }
}

/// Counts of interest around the hill nearest to the ant.
#[derive(Clone, Copy, Debug)]
struct HillWatch {
    food: usize,
    defenders: usize,
}

impl HillWatch {
    fn observe(world: &dyn WorldOracle, location: Position) -> Option<Self> {
        let hill = closest(world, location, &world.own_hills())?;
        let around = |kind| {
            world
                .nearby_entities(kind, hill)
                .into_iter()
                .filter(|&point| within(world, hill, point, FeatureRules::NEARBY_DISTANCE))
                .count()
        };
        // Friendly lookups skip the hill cell itself, so an occupant is added back.
        let defenders = around(EntityKind::Friendly) + usize::from(world.friendly_at(hill));
        Some(Self {
            food: around(EntityKind::Food),
            defenders,
        })
    }
}

fn within(world: &dyn WorldOracle, a: Position, b: Position, radius: u32) -> bool {
    world.manhattan_distance(a, b) <= radius
}

fn meets(count: usize, threshold: u32) -> bool {
    match threshold {
        0 => count == 0,
        n => count >= n as usize,
    }
}

/// Action-independent predicates over the world around the ant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Qualifier {
    features: Vec<QualifierFeature>,
    names: FeatureNames,
}

impl Qualifier {
    pub const TYPE_NAME: &'static str = "Qualifying";

    /// Extractor declaring [`QualifierFeature::DEFAULT`].
    pub fn new() -> Self {
        let features = QualifierFeature::DEFAULT.to_vec();
        let names = FeatureNames::from_unique(features.iter().map(|f| f.label()));
        Self { features, names }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateFeatureName`] if a predicate is listed twice.
    pub fn with_features(features: Vec<QualifierFeature>) -> Result<Self, ConfigError> {
        let names = FeatureNames::new(features.iter().map(|f| f.label()))?;
        Ok(Self { features, names })
    }

    pub fn features(&self) -> &[QualifierFeature] {
        &self.features
    }

    pub fn is_default(&self) -> bool {
        self.features == QualifierFeature::DEFAULT
    }
}

impl Default for Qualifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for Qualifier {
    fn names(&self) -> &FeatureNames {
        &self.names
    }

    fn evaluate(
        &self,
        env: &FeatureEnv<'_>,
        _ctx: &mut EvaluationContext,
        location: Position,
        _action: Direction,
    ) -> FeatureVector {
        let world = env.world();
        let nearest = |kind| closest(world, location, &world.nearby_entities(kind, location));
        let enemy = nearest(EntityKind::Enemy);
        let friend = nearest(EntityKind::Friendly);
        let food = nearest(EntityKind::Food);
        let hill = self
            .features
            .iter()
            .any(|f| f.needs_hill())
            .then(|| HillWatch::observe(world, location))
            .flatten();

        let near = |target: Option<Position>, radius| {
            target.is_some_and(|target| within(world, location, target, radius))
        };

        self.features
            .iter()
            .map(|feature| match *feature {
                QualifierFeature::EnemyNearby => near(enemy, FeatureRules::NEARBY_DISTANCE),
                QualifierFeature::FriendNearby => near(friend, FeatureRules::NEARBY_DISTANCE),
                QualifierFeature::FriendClose => near(friend, FeatureRules::CLOSE_DISTANCE),
                QualifierFeature::MoreThan100Ants => {
                    world.ant_count() > FeatureRules::CROWD_THRESHOLD
                }
                QualifierFeature::EnemyNearerToFood => match (enemy, food) {
                    (Some(enemy), Some(food)) => moving_towards(world, location, enemy, food),
                    _ => false,
                },
                QualifierFeature::FoodAtHill(threshold) => {
                    hill.is_some_and(|hill| meets(hill.food, threshold))
                }
                QualifierFeature::AntsDefending(threshold) => {
                    hill.is_some_and(|hill| meets(hill.defenders, threshold))
                }
            })
            .collect()
    }
}
