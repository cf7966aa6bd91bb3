#![allow(dead_code)]

use std::cell::Cell;

use ant_core::{MapDimensions, PathOracle, Position, WorldSnapshot};

/// Path oracle wrapper that records how often it was asked to search.
pub struct CountingPaths<'a, P> {
    inner: &'a P,
    calls: Cell<u32>,
}

impl<'a, P: PathOracle> CountingPaths<'a, P> {
    pub fn new(inner: &'a P) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl<P: PathOracle> PathOracle for CountingPaths<'_, P> {
    fn find_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.find_path(from, to)
    }
}

/// Open 40x40 torus whose lookups see the whole map.
pub fn open_world() -> WorldSnapshot {
    WorldSnapshot::new(MapDimensions::new(40, 40)).with_lookup_radius(40)
}
