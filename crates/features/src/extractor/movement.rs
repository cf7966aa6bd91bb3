//! Movement features: does an action take the ant toward something?

use ant_core::{
    Direction, EntityKind, FeatureEnv, Position, VisitOracle, WorldOracle, closest,
};
use serde::{Deserialize, Serialize};

use super::{Extractor, FeatureVector};
use crate::context::EvaluationContext;
use crate::error::ConfigError;
use crate::names::FeatureNames;

/// One declarable movement feature.
///
/// The display string is the persisted feature name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum MovementFeature {
    #[strum(serialize = "Moving Towards Closest Enemy")]
    TowardEnemy,
    #[strum(serialize = "Moving Towards Closest Food")]
    TowardFood,
    #[strum(serialize = "Moving Towards Friendly")]
    TowardFriendly,
    #[strum(serialize = "Moving Towards Closest Food on AStar path")]
    TowardFoodOnPath,
    /// Not part of the default list; opt in through a `features` list.
    #[strum(serialize = "Moving Towards Closest Enemy on AStar path")]
    TowardEnemyOnPath,
    #[strum(serialize = "Moving Towards Least Visited")]
    TowardLeastVisited,
}

impl MovementFeature {
    pub const DEFAULT: [MovementFeature; 5] = [
        MovementFeature::TowardEnemy,
        MovementFeature::TowardFood,
        MovementFeature::TowardFriendly,
        MovementFeature::TowardFoodOnPath,
        MovementFeature::TowardLeastVisited,
    ];

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Returns true if `to` is strictly closer to `target` than `from`.
pub fn moving_towards(
    world: &dyn WorldOracle,
    from: Position,
    to: Position,
    target: Position,
) -> bool {
    world.manhattan_distance(to, target) < world.manhattan_distance(from, target)
}

/// Distance- and path-based movement features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeuristicMovement {
    features: Vec<MovementFeature>,
    names: FeatureNames,
}

impl HeuristicMovement {
    pub const TYPE_NAME: &'static str = "MovingTowards";

    /// Extractor declaring [`MovementFeature::DEFAULT`].
    pub fn new() -> Self {
        let features = MovementFeature::DEFAULT.to_vec();
        let names = FeatureNames::from_unique(features.iter().map(|f| f.label()));
        Self { features, names }
    }

    /// Extractor declaring exactly `features`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateFeatureName`] if a feature is listed twice.
    pub fn with_features(features: Vec<MovementFeature>) -> Result<Self, ConfigError> {
        let names = FeatureNames::new(features.iter().map(|f| f.label()))?;
        Ok(Self { features, names })
    }

    pub fn features(&self) -> &[MovementFeature] {
        &self.features
    }

    pub fn is_default(&self) -> bool {
        self.features == MovementFeature::DEFAULT
    }
}

impl Default for HeuristicMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HeuristicMovement {
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
        let world = env.world();
        let nearest = |kind| closest(world, location, &world.nearby_entities(kind, location));
        let food = nearest(EntityKind::Food);
        let enemy = nearest(EntityKind::Enemy);
        let friend = nearest(EntityKind::Friendly);
        let next = world.next_position(location, action);

        tracing::debug!(
            %location,
            %action,
            food = ?food,
            enemy = ?enemy,
            friend = ?friend,
            "movement targets"
        );

        let toward = |target: Option<Position>| {
            target.is_some_and(|target| moving_towards(world, location, next, target))
        };

        self.features
            .iter()
            .map(|feature| match feature {
                MovementFeature::TowardEnemy => toward(enemy),
                MovementFeature::TowardFood => toward(food),
                MovementFeature::TowardFriendly => toward(friend),
                MovementFeature::TowardFoodOnPath => food.is_some_and(|target| {
                    ctx.moving_along_path(env.paths(), location, next, target)
                }),
                MovementFeature::TowardEnemyOnPath => enemy.is_some_and(|target| {
                    ctx.moving_along_path(env.paths(), location, next, target)
                }),
                MovementFeature::TowardLeastVisited => {
                    least_visited(env.visits(), location, action)
                }
            })
            .collect()
    }
}

/// True if no other real move leads to a less visited cell than `action`.
fn least_visited(visits: &dyn VisitOracle, location: Position, action: Direction) -> bool {
    let taken = visits.visit_count_if_taken(location, action);
    Direction::ALL
        .into_iter()
        .filter(|&direction| direction != action && !direction.is_halt())
        .all(|direction| taken <= visits.visit_count_if_taken(location, direction))
}
