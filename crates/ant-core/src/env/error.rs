//! Snapshot validation errors.

use crate::state::Position;

/// Errors raised when a [`super::WorldSnapshot`] is structurally invalid.
///
/// Snapshots usually come from files, so these are validation errors: the
/// input should be fixed, retrying will not help.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// Width or height is zero.
    #[error("map dimensions must be non-zero (got {width}x{height})")]
    EmptyMap { width: u32, height: u32 },

    /// An entity or visit record lies outside the map.
    #[error("{what} at {position} is outside the {width}x{height} map")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        width: u32,
        height: u32,
    },

    /// An ant or hill is placed on water.
    #[error("{what} at {position} is placed on water")]
    OnWater {
        what: &'static str,
        position: Position,
    },
}
