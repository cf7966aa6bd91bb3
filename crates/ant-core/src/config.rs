/// Rule constants and tunable parameters for feature extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureRules {
    /// Maximum number of path searches allowed in one decision cycle.
    /// Once spent, path-aware features fall back to `false`.
    pub path_search_budget: u32,
}

impl FeatureRules {
    // ===== fixed rule constants =====
    /// Manhattan radius for "nearby" qualifiers.
    pub const NEARBY_DISTANCE: u32 = 5;
    /// Manhattan radius for "close" qualifiers.
    pub const CLOSE_DISTANCE: u32 = 2;
    /// Colony size above which the "more than 100 ants" qualifier holds.
    pub const CROWD_THRESHOLD: usize = 100;

    // ===== runtime-tunable defaults =====
    /// Path searches allowed per decision cycle unless overridden.
    pub const DEFAULT_PATH_SEARCH_BUDGET: u32 = 60;
    /// Radius used by snapshot worlds to answer nearby-entity lookups.
    pub const DEFAULT_LOOKUP_RADIUS: u32 = 10;

    pub fn new() -> Self {
        Self {
            path_search_budget: Self::DEFAULT_PATH_SEARCH_BUDGET,
        }
    }

    pub fn with_path_search_budget(path_search_budget: u32) -> Self {
        Self { path_search_budget }
    }
}

impl Default for FeatureRules {
    fn default() -> Self {
        Self::new()
    }
}
