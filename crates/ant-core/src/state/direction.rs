use super::Position;

/// Candidate action for an ant: one of the four cardinal moves, or staying put.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
    /// No-op move; the ant stays on its tile.
    Halt,
}

impl Direction {
    /// Every legal action, including [`Direction::Halt`].
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Halt,
    ];

    /// The four actions that actually change the ant's tile.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Halt => (0, 0),
        }
    }

    pub const fn is_halt(self) -> bool {
        matches!(self, Direction::Halt)
    }

    /// Applies the move on an unbounded plane. Worlds that wrap or clamp
    /// coordinates do so in [`crate::WorldOracle::next_position`].
    pub const fn apply(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn halt_is_excluded_from_moves() {
        assert!(!Direction::MOVES.contains(&Direction::Halt));
        assert!(Direction::ALL.contains(&Direction::Halt));
        assert_eq!(Direction::Halt.apply(Position::new(3, 4)), Position::new(3, 4));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Direction::from_str("EAST").unwrap(), Direction::East);
        assert_eq!(Direction::East.as_ref(), "east");
        assert!(Direction::from_str("up").is_err());
    }
}
