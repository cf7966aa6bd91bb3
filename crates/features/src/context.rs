//! Per-decision-cycle evaluation context.
//!
//! The [`EvaluationContext`] is the only mutable state shared between
//! extractor calls. It memoizes path searches keyed by the ant's location and
//! caps how many searches may run in one cycle.
//!
//! # Lifetime
//!
//! Create one context at the start of a decision cycle, pass it by `&mut` to
//! every evaluation in that cycle, and drop (or [`reset`](EvaluationContext::reset))
//! it before the next one. Paths cached in an earlier turn describe a world
//! that no longer exists.
//!
//! # Ordering
//!
//! Cache contents and the search counter influence later calls, so callers
//! should evaluate agents and actions in a stable order to keep results
//! reproducible.

use std::collections::HashMap;

use ant_core::{FeatureRules, PathOracle, Position};

/// Counters describing how the path cache was used during one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Lookups answered from the cache without searching.
    pub cache_hits: u32,
    /// Searches handed to the path oracle (bounded by the budget).
    pub searches: u32,
    /// Searches that found no path.
    pub failed_searches: u32,
    /// Lookups that wanted a search but found the budget spent.
    pub refused_searches: u32,
}

#[derive(Debug)]
pub struct EvaluationContext {
    paths: HashMap<Position, Vec<Position>>,
    budget: u32,
    stats: CycleStats,
}

impl EvaluationContext {
    /// Creates a fresh context with the default search budget.
    pub fn new() -> Self {
        Self::with_budget(FeatureRules::DEFAULT_PATH_SEARCH_BUDGET)
    }

    pub fn with_budget(budget: u32) -> Self {
        Self {
            paths: HashMap::new(),
            budget,
            stats: CycleStats::default(),
        }
    }

    pub fn from_rules(rules: &FeatureRules) -> Self {
        Self::with_budget(rules.path_search_budget)
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn searches_used(&self) -> u32 {
        self.stats.searches
    }

    pub fn remaining_searches(&self) -> u32 {
        self.budget.saturating_sub(self.stats.searches)
    }

    pub fn is_exhausted(&self) -> bool {
        self.stats.searches >= self.budget
    }

    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    /// Remaining steps of the path discovered from `location`, start cell excluded.
    pub fn cached_path(&self, location: Position) -> Option<&[Position]> {
        self.paths.get(&location).map(Vec::as_slice)
    }

    /// Returns true if `next` is the first step of a path from `location` to `target`.
    ///
    /// A cached path only counts when it still ends at `target`; a path cached
    /// for a different target yields `false` without searching again. Without
    /// a cached path a new search is started while budget remains. A failed
    /// search caches nothing, so a later call may retry with another target.
    pub fn moving_along_path(
        &mut self,
        paths: &dyn PathOracle,
        location: Position,
        next: Position,
        target: Position,
    ) -> bool {
        if let Some(path) = self.paths.get(&location).filter(|path| !path.is_empty()) {
            self.stats.cache_hits += 1;
            tracing::trace!(%location, %target, steps = path.len(), "path cache hit");
            return follows(path, next, target);
        }

        if self.is_exhausted() {
            self.stats.refused_searches += 1;
            tracing::trace!(%location, %target, "path search budget exhausted");
            return false;
        }

        self.stats.searches += 1;
        match paths.find_path(location, target) {
            Some(path) if path.len() > 1 => {
                let steps = path[1..].to_vec();
                let hit = follows(&steps, next, target);
                self.paths.insert(location, steps);
                hit
            }
            Some(_) => false,
            None => {
                self.stats.failed_searches += 1;
                tracing::debug!(%location, %target, "no path found");
                false
            }
        }
    }

    /// Clears the cache and the search counter for a new decision cycle.
    pub fn reset(&mut self) {
        log_summary(self.budget, self.stats, self.paths.len());
        self.paths.clear();
        self.stats = CycleStats::default();
    }

    /// Ends the cycle, logging and returning its statistics.
    pub fn finish_cycle(self) -> CycleStats {
        log_summary(self.budget, self.stats, self.paths.len());
        self.stats
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}

fn follows(path: &[Position], next: Position, target: Position) -> bool {
    path.first() == Some(&next) && path.last() == Some(&target)
}

fn log_summary(budget: u32, stats: CycleStats, cached: usize) {
    tracing::debug!(
        budget,
        searches = stats.searches,
        failed = stats.failed_searches,
        refused = stats.refused_searches,
        hits = stats.cache_hits,
        cached,
        "path cache cycle summary"
    );
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct StraightLine {
        calls: Cell<u32>,
    }

    impl PathOracle for StraightLine {
        fn find_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
            self.calls.set(self.calls.get() + 1);
            if from.y != to.y {
                return None;
            }
            let step = if to.x >= from.x { 1 } else { -1 };
            let mut path = vec![from];
            let mut cursor = from;
            while cursor != to {
                cursor = cursor.offset(step, 0);
                path.push(cursor);
            }
            Some(path)
        }
    }

    fn oracle() -> StraightLine {
        StraightLine {
            calls: Cell::new(0),
        }
    }

    #[test]
    fn fresh_search_caches_path_without_start() {
        let paths = oracle();
        let mut ctx = EvaluationContext::new();
        let from = Position::new(0, 0);
        let target = Position::new(3, 0);

        assert!(ctx.moving_along_path(&paths, from, Position::new(1, 0), target));
        assert_eq!(
            ctx.cached_path(from),
            Some(&[Position::new(1, 0), Position::new(2, 0), target][..])
        );

        assert!(!ctx.moving_along_path(&paths, from, Position::new(-1, 0), target));
        assert_eq!(paths.calls.get(), 1);
        assert_eq!(ctx.stats().cache_hits, 1);
    }

    #[test]
    fn cached_path_for_other_target_is_not_followed() {
        let paths = oracle();
        let mut ctx = EvaluationContext::new();
        let from = Position::new(0, 0);
        assert!(ctx.moving_along_path(&paths, from, Position::new(1, 0), Position::new(3, 0)));
        assert!(!ctx.moving_along_path(&paths, from, Position::new(1, 0), Position::new(5, 0)));
        assert_eq!(paths.calls.get(), 1);
    }

    #[test]
    fn failed_search_is_retried_later() {
        let paths = oracle();
        let mut ctx = EvaluationContext::new();
        let from = Position::new(0, 0);
        assert!(!ctx.moving_along_path(&paths, from, Position::new(1, 0), Position::new(2, 2)));
        assert_eq!(ctx.cached_path(from), None);
        assert!(ctx.moving_along_path(&paths, from, Position::new(1, 0), Position::new(2, 0)));
        assert_eq!(paths.calls.get(), 2);
        assert_eq!(ctx.stats().failed_searches, 1);
    }

    #[test]
    fn exhausted_budget_skips_the_oracle() {
        let paths = oracle();
        let mut ctx = EvaluationContext::with_budget(1);
        let (from, next, target) = (Position::new(0, 0), Position::new(1, 0), Position::new(2, 0));
        assert!(ctx.moving_along_path(&paths, from, next, target));
        assert!(ctx.is_exhausted());
        let (from, next, target) = (Position::new(0, 5), Position::new(1, 5), Position::new(2, 5));
        assert!(!ctx.moving_along_path(&paths, from, next, target));
        assert_eq!(paths.calls.get(), 1);
        assert_eq!(ctx.stats().refused_searches, 1);
    }

    #[test]
    fn reset_clears_cache_and_counter() {
        let paths = oracle();
        let mut ctx = EvaluationContext::with_budget(1);
        let (from, next, target) = (Position::new(0, 0), Position::new(1, 0), Position::new(2, 0));
        ctx.moving_along_path(&paths, from, next, target);
        ctx.reset();
        assert_eq!(ctx.searches_used(), 0);
        assert_eq!(ctx.remaining_searches(), 1);
        assert_eq!(ctx.cached_path(Position::new(0, 0)), None);
    }

    #[test]
    fn target_under_the_ant_is_not_a_path() {
        let paths = oracle();
        let mut ctx = EvaluationContext::new();
        let here = Position::new(4, 4);
        assert!(!ctx.moving_along_path(&paths, here, Position::new(5, 4), here));
        assert_eq!(ctx.cached_path(here), None);
        assert_eq!(ctx.searches_used(), 1);
    }
}
