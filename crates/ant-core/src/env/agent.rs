use crate::state::{Direction, Position};

/// Per-agent memory kept by the bot between turns.
pub trait VisitOracle {
    /// How often the cell reached by taking `direction` from `location` has
    /// been visited so far.
    fn visit_count_if_taken(&self, location: Position, direction: Direction) -> u32;
}

/// Expensive search collaborator used by path-aware features.
pub trait PathOracle {
    /// Attempts to find a walkable path from `from` to `to`.
    ///
    /// A returned path starts with `from` itself. `None` means no path exists
    /// (or the search gave up); that is an expected outcome, not an error.
    fn find_path(&self, from: Position, to: Position) -> Option<Vec<Position>>;
}
