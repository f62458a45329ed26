//! Search configuration.
//!
//! The internal time budget must stay below the match runner's enforced
//! limit so the announcement still lands in time.

use std::time::Duration;

use crate::game_repr::BoardGeometry;

/// Internal search budget per move
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(140);

/// Iterative deepening ceiling
pub const DEFAULT_MAX_DEPTH: u8 = 20;

/// Plies during which the corner opening is played instead of searching
pub const DEFAULT_OPENING_PLIES: u32 = 2;

/// Tunables for the alpha-beta player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub time_budget: Duration,
    pub max_depth: u8,
    pub opening_plies: u32,
    pub geometry: BoardGeometry,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_depth: DEFAULT_MAX_DEPTH,
            opening_plies: DEFAULT_OPENING_PLIES,
            geometry: BoardGeometry::ISOLATION,
        }
    }
}

impl SearchConfig {
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set to 0 to search from the very first ply
    pub fn with_opening_plies(mut self, opening_plies: u32) -> Self {
        self.opening_plies = opening_plies;
        self
    }
}
