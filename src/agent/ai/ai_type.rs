//! AI Type Registry - Centralized registry for player implementations
//!
//! This module provides a way to enumerate and instantiate the available
//! agents: the alpha-beta search agent and the two baselines it is measured
//! against.

use std::time::Duration;

use super::{AlphaBetaPlayer, Difficulty, DEFAULT_TIME_BUDGET};
use crate::agent::player::Player;
use crate::agent::{GreedyPlayer, RandomPlayer};
use crate::game_repr::{Isolation, PlayerId};

/// Boxed player that can be moved onto a worker thread
pub type BoxedPlayer = Box<dyn Player<Isolation> + Send>;

/// Enumeration of available AI algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AIType {
    /// Iterative deepening alpha-beta search
    #[default]
    AlphaBeta,
    /// One-ply liberty maximiser
    Greedy,
    /// Uniformly random legal actions
    Random,
}

impl AIType {
    /// Get all available AI types
    pub fn all() -> &'static [AIType] {
        &[AIType::AlphaBeta, AIType::Greedy, AIType::Random]
    }

    /// Get the display name for this AI type
    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::AlphaBeta => "AlphaBeta",
            AIType::Greedy => "Greedy",
            AIType::Random => "Random",
        }
    }

    /// Command-line identifier
    pub fn key(&self) -> &'static str {
        match self {
            AIType::AlphaBeta => "alpha-beta",
            AIType::Greedy => "greedy",
            AIType::Random => "random",
        }
    }

    /// Get a short description of this AI type
    pub fn description(&self) -> &'static str {
        match self {
            AIType::AlphaBeta => "Iterative deepening minimax with alpha-beta pruning",
            AIType::Greedy => "Keeps the most liberties one move ahead",
            AIType::Random => "Plays a random legal action",
        }
    }

    /// Check if this AI type supports difficulty levels
    pub fn supports_difficulty(&self) -> bool {
        matches!(self, AIType::AlphaBeta)
    }

    /// Create a Player instance for this AI type
    ///
    /// `seed` makes any randomness in the player reproducible. `time_budget`
    /// only applies to searching players.
    pub fn create_player(
        &self,
        player_id: PlayerId,
        difficulty: Difficulty,
        time_budget: Duration,
        seed: u64,
    ) -> BoxedPlayer {
        match self {
            AIType::AlphaBeta => {
                let config = difficulty.search_config().with_time_budget(time_budget);
                let name = format!("AlphaBeta ({})", difficulty.name());
                Box::new(AlphaBetaPlayer::new(player_id, config, name).with_seed(seed))
            }
            AIType::Greedy => Box::new(GreedyPlayer::new(player_id)),
            AIType::Random => Box::new(RandomPlayer::new(player_id).with_seed(seed)),
        }
    }
}

impl std::str::FromStr for AIType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AIType::all()
            .iter()
            .copied()
            .find(|t| t.key() == s || t.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown agent '{}' (expected alpha-beta, greedy or random)", s))
    }
}

/// Configuration for a single AI player
///
/// This stores all settings needed to create an AI player,
/// including the algorithm type and difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIConfig {
    /// The AI algorithm to use
    pub ai_type: AIType,
    /// The difficulty/strength level
    pub difficulty: Difficulty,
    /// Internal search budget per move
    pub time_budget: Duration,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self::new(AIType::default(), Difficulty::default())
    }
}

impl AIConfig {
    /// Create a new AI configuration with the default search budget
    pub fn new(ai_type: AIType, difficulty: Difficulty) -> Self {
        Self {
            ai_type,
            difficulty,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Create a Player instance from this configuration
    pub fn create_player(&self, player_id: PlayerId, seed: u64) -> BoxedPlayer {
        self.ai_type.create_player(player_id, self.difficulty, self.time_budget, seed)
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        if self.ai_type.supports_difficulty() {
            format!("{} ({})", self.ai_type.display_name(), self.difficulty.name())
        } else {
            self.ai_type.display_name().to_string()
        }
    }
}
