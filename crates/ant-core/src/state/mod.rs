//! Plain value types shared by the oracles and the feature extractors.
mod common;
mod direction;

pub use common::{EntityKind, Position};
pub use direction::Direction;
