//! Serializable world snapshot backing every oracle.
//!
//! The snapshot is a complete, self-contained picture of one turn on a
//! toroidal grid. It is used by tests and by the command-line tool to drive
//! the extractors without a live game engine.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{PathOracle, SnapshotError, VisitOracle, WorldOracle};
use crate::config::FeatureRules;
use crate::state::{Direction, EntityKind, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Folds any position back onto the torus.
    pub fn wrap(&self, position: Position) -> Position {
        Position::new(
            position.x.rem_euclid(self.width.max(1) as i32),
            position.y.rem_euclid(self.height.max(1) as i32),
        )
    }
}

/// One turn of the world on a wrap-around grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub dimensions: MapDimensions,

    /// Manhattan radius used by [`WorldOracle::nearby_entities`].
    #[cfg_attr(feature = "serde", serde(default = "default_lookup_radius"))]
    pub lookup_radius: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub water: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub my_ants: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemy_ants: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub food: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub my_hills: Vec<Position>,

    /// Visit counters per cell; cells not listed were never visited.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visits: Vec<(Position, u32)>,
}

#[cfg(feature = "serde")]
fn default_lookup_radius() -> u32 {
    FeatureRules::DEFAULT_LOOKUP_RADIUS
}

impl WorldSnapshot {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            lookup_radius: FeatureRules::DEFAULT_LOOKUP_RADIUS,
            water: Vec::new(),
            my_ants: Vec::new(),
            enemy_ants: Vec::new(),
            food: Vec::new(),
            my_hills: Vec::new(),
            visits: Vec::new(),
        }
    }

    pub fn with_lookup_radius(mut self, radius: u32) -> Self {
        self.lookup_radius = radius;
        self
    }

    pub fn with_water(mut self, position: impl Into<Position>) -> Self {
        self.water.push(position.into());
        self
    }

    pub fn with_ant(mut self, position: impl Into<Position>) -> Self {
        self.my_ants.push(position.into());
        self
    }

    pub fn with_enemy(mut self, position: impl Into<Position>) -> Self {
        self.enemy_ants.push(position.into());
        self
    }

    pub fn with_food(mut self, position: impl Into<Position>) -> Self {
        self.food.push(position.into());
        self
    }

    pub fn with_hill(mut self, position: impl Into<Position>) -> Self {
        self.my_hills.push(position.into());
        self
    }

    pub fn with_visits(mut self, position: impl Into<Position>, count: u32) -> Self {
        let position = position.into();
        match self.visits.iter_mut().find(|(cell, _)| *cell == position) {
            Some(entry) => entry.1 = count,
            None => self.visits.push((position, count)),
        }
        self
    }

    /// Checks that every recorded cell lies on the map and that nothing
    /// walkable-only sits on water.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let MapDimensions { width, height } = self.dimensions;
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptyMap { width, height });
        }

        let groups: [(&'static str, &[Position]); 5] = [
            ("water", &self.water),
            ("ant", &self.my_ants),
            ("enemy", &self.enemy_ants),
            ("food", &self.food),
            ("hill", &self.my_hills),
        ];
        for (what, cells) in groups {
            if let Some(&position) = cells.iter().find(|p| !self.dimensions.contains(**p)) {
                return Err(SnapshotError::OutOfBounds {
                    what,
                    position,
                    width,
                    height,
                });
            }
        }
        if let Some(&(position, _)) = self
            .visits
            .iter()
            .find(|(p, _)| !self.dimensions.contains(*p))
        {
            return Err(SnapshotError::OutOfBounds {
                what: "visit record",
                position,
                width,
                height,
            });
        }

        for (what, cells) in [("ant", &self.my_ants), ("hill", &self.my_hills)] {
            if let Some(&position) = cells.iter().find(|p| self.is_water(**p)) {
                return Err(SnapshotError::OnWater { what, position });
            }
        }
        Ok(())
    }

    pub fn is_water(&self, position: Position) -> bool {
        let position = self.dimensions.wrap(position);
        self.water.contains(&position)
    }

    pub fn visits_at(&self, position: Position) -> u32 {
        let position = self.dimensions.wrap(position);
        self.visits
            .iter()
            .find(|(cell, _)| *cell == position)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    fn entities(&self, kind: EntityKind) -> &[Position] {
        match kind {
            EntityKind::Enemy => &self.enemy_ants,
            EntityKind::Food => &self.food,
            EntityKind::Friendly => &self.my_ants,
        }
    }
}

impl WorldOracle for WorldSnapshot {
    fn manhattan_distance(&self, a: Position, b: Position) -> u32 {
        let a = self.dimensions.wrap(a);
        let b = self.dimensions.wrap(b);
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.min(self.dimensions.width - dx) + dy.min(self.dimensions.height - dy)
    }

    fn nearby_entities(&self, kind: EntityKind, location: Position) -> Vec<Position> {
        let origin = self.dimensions.wrap(location);
        self.entities(kind)
            .iter()
            .copied()
            .filter(|&point| !(kind == EntityKind::Friendly && point == origin))
            .filter(|&point| self.manhattan_distance(origin, point) <= self.lookup_radius)
            .collect()
    }

    fn next_position(&self, location: Position, direction: Direction) -> Position {
        self.dimensions.wrap(direction.apply(location))
    }

    fn ant_count(&self) -> usize {
        self.my_ants.len()
    }

    fn own_hills(&self) -> Vec<Position> {
        self.my_hills.clone()
    }

    fn friendly_at(&self, position: Position) -> bool {
        self.my_ants.contains(&self.dimensions.wrap(position))
    }
}

impl VisitOracle for WorldSnapshot {
    fn visit_count_if_taken(&self, location: Position, direction: Direction) -> u32 {
        self.visits_at(self.next_position(location, direction))
    }
}

impl PathOracle for WorldSnapshot {
    /// Breadth-first search over non-water cells with wrap-around.
    fn find_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
        let start = self.dimensions.wrap(from);
        let goal = self.dimensions.wrap(to);
        if self.is_water(start) || self.is_water(goal) {
            return None;
        }

        let mut parents: HashMap<Position, Position> = HashMap::new();
        let mut seen: HashSet<Position> = HashSet::from([start]);
        let mut frontier = VecDeque::from([start]);

        while let Some(cell) = frontier.pop_front() {
            if cell == goal {
                let mut path = vec![goal];
                let mut cursor = goal;
                while let Some(&parent) = parents.get(&cursor) {
                    path.push(parent);
                    cursor = parent;
                }
                path.reverse();
                return Some(path);
            }
            for direction in Direction::MOVES {
                let next = self.next_position(cell, direction);
                if self.is_water(next) || !seen.insert(next) {
                    continue;
                }
                parents.insert(next, cell);
                frontier.push_back(next);
            }
        }
        None
    }
}
