//! AlphaBetaPlayer - Isolation AI using iterative deepening alpha-beta search
//!
//! This module implements the move selection policy of the search agent:
//! - For the first plies of a game it places itself on a random free corner
//! - Afterwards it runs iterative deepening alpha-beta search against its
//!   time budget and announces the best move found
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 1
//! - **Medium**: Depth 3
//! - **Hard**: Depth 6
//! - **Expert**: Depth 20
//!
//! Every level searches against the same 140 ms budget; lower levels just stop
//! deepening earlier.
//!
//! # Examples
//!
//! ```
//! use isolation_agent::agent::{ActionSlot, Player};
//! use isolation_agent::agent::ai::{AlphaBetaPlayer, Difficulty};
//! use isolation_agent::game_repr::{Isolation, PlayerId};
//!
//! let mut ai = AlphaBetaPlayer::with_difficulty(PlayerId::First, Difficulty::Medium).with_seed(7);
//! let state = Isolation::new();
//! let slot = ActionSlot::new();
//!
//! let action = ai.get_action(&state, &slot).unwrap();
//! assert_eq!(slot.latest(), Some(action));
//! ```

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::player::{playable_actions, Player};
use crate::agent::ActionSlot;
use crate::error::AgentError;
use crate::game_repr::{GameState, PlayerId};
use super::config::SearchConfig;
use super::deadline::Deadline;
use super::evaluation::Evaluator;
use super::opening::corner_opening;
use super::search::iterative_deepening_search;

/// AI difficulty levels that map to search depth ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Depth 1: picks the move with the best immediate evaluation
    Easy,

    /// Depth 3
    Medium,

    /// Depth 6
    Hard,

    /// Depth 20: deepens until the time budget runs out
    #[default]
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

    /// Get the iterative deepening ceiling for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 6,
            Difficulty::Expert => 20,
        }
    }

    /// Search configuration for this difficulty level
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default().with_max_depth(self.max_depth())
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty '{}' (expected easy, medium, hard or expert)", s))
    }
}

/// AI Player that uses iterative deepening alpha-beta search
///
/// Each call to `get_action` is self-contained: the deadline, the alpha-beta
/// bounds and the best-move bookkeeping all live for one call only. The only
/// state carried between calls is the configuration and the random source for
/// the opening.
pub struct AlphaBetaPlayer {
    /// Seat this player occupies, fixed for its lifetime
    player_id: PlayerId,

    config: SearchConfig,

    evaluator: Evaluator,

    /// Random source for the opening corner choice
    rng: StdRng,

    /// Display name for this AI player
    name: String,
}

impl AlphaBetaPlayer {
    /// Create a new AlphaBetaPlayer with custom configuration and name
    pub fn new(player_id: PlayerId, config: SearchConfig, name: String) -> Self {
        Self {
            player_id,
            config,
            evaluator: Evaluator::new(config.geometry),
            rng: StdRng::from_entropy(),
            name,
        }
    }

    /// Create a new AlphaBetaPlayer with specified difficulty and auto-generated name
    ///
    /// The player name is generated as "AlphaBeta ({difficulty})".
    pub fn with_difficulty(player_id: PlayerId, difficulty: Difficulty) -> Self {
        let name = format!("AlphaBeta ({})", difficulty.name());
        Self::new(player_id, difficulty.search_config(), name)
    }

    /// Replace the random source with a seeded one, making the opening reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<S: GameState> Player<S> for AlphaBetaPlayer {
    /// Choose and announce an action
    ///
    /// # Search Process
    ///
    /// 1. Anchor the deadline at the moment of the call
    /// 2. Reject terminal states and states without actions
    /// 3. During the opening plies, announce a random free corner
    /// 4. Otherwise run iterative deepening and announce its move, or the first
    ///    legal action if the search could not complete a single root action
    fn get_action(&mut self, state: &S, slot: &ActionSlot<S::Action>) -> Result<S::Action, AgentError> {
        let deadline = Deadline::new(self.config.time_budget);
        let actions = playable_actions(state)?;

        if state.ply_count() < self.config.opening_plies {
            if let Some(action) = corner_opening(state, self.player_id, &self.config.geometry, &mut self.rng) {
                debug!("[{}] opening corner {}", self.name, action);
                slot.put(action);
                return Ok(action);
            }
        }

        let search_result = iterative_deepening_search(
            state,
            self.player_id,
            &self.evaluator,
            deadline,
            self.config.max_depth,
        );

        let action = match search_result.best_move {
            Some(action) => action,
            None => {
                // Search produced nothing before the deadline: any legal action
                // beats an empty slot
                let fallback = actions[0];
                warn!(
                    "[{}] search returned no move at ply {}, falling back to {}",
                    self.name,
                    state.ply_count(),
                    fallback
                );
                fallback
            }
        };

        debug!(
            "[{}] searched to depth {} ({} nodes, {}ms), playing {}",
            self.name, search_result.depth, search_result.nodes, search_result.time_ms, action
        );

        slot.put(action);
        Ok(action)
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
