use crate::state::{Direction, EntityKind, Position};

/// Read-only view of the world geometry and entity bookkeeping for one turn.
///
/// Implementations own the distance metric; extractors never compute
/// distances themselves, so wrap-around maps behave consistently.
pub trait WorldOracle {
    /// Manhattan distance between two cells under the world's topology.
    fn manhattan_distance(&self, a: Position, b: Position) -> u32;

    /// Entities of `kind` the agent at `location` can currently see.
    ///
    /// Friendly lookups never include the ant standing on `location`.
    fn nearby_entities(&self, kind: EntityKind, location: Position) -> Vec<Position>;

    /// Orders `points` by distance from `location`, nearest first.
    ///
    /// The default sort is stable, so ties keep the caller's order.
    fn sort_by_distance(&self, location: Position, points: &[Position]) -> Vec<(u32, Position)> {
        let mut sorted: Vec<(u32, Position)> = points
            .iter()
            .map(|&point| (self.manhattan_distance(location, point), point))
            .collect();
        sorted.sort_by_key(|(distance, _)| *distance);
        sorted
    }

    /// Cell reached from `location` by taking `direction`.
    fn next_position(&self, location: Position, direction: Direction) -> Position;

    /// Number of ants our colony currently controls.
    fn ant_count(&self) -> usize;

    /// Locations of our own hills.
    fn own_hills(&self) -> Vec<Position> {
        Vec::new()
    }

    /// True if one of our ants stands on `position`.
    ///
    /// The default looks back at `position` from a neighboring cell, since
    /// friendly lookups never report the queried cell itself.
    fn friendly_at(&self, position: Position) -> bool {
        let neighbor = self.next_position(position, Direction::North);
        self.nearby_entities(EntityKind::Friendly, neighbor)
            .contains(&position)
    }
}

/// Picks the entity nearest to `location`, deferring tie order to the world.
pub fn closest(
    world: &dyn WorldOracle,
    location: Position,
    points: &[Position],
) -> Option<Position> {
    match points {
        [] => None,
        [only] => Some(*only),
        _ => world
            .sort_by_distance(location, points)
            .first()
            .map(|&(_, point)| point),
    }
}
