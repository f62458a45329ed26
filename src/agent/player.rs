//! Player trait and associated types for Isolation agents.
//!
//! This module provides the core abstraction for entities that can choose an
//! action. Different player types (alpha-beta search, greedy, random) implement
//! the [`Player`] trait to take part in matches run by the orchestrator.
//!
//! # Announcing actions
//!
//! A player does not hand its action back only through the return value. It
//! pushes every decision into an [`ActionSlot`] owned by the match runner,
//! which reads the slot when the turn's time limit expires. A player may
//! announce several times; the latest announcement wins. Returning without
//! announcing anything forfeits the turn.
//!
//! # Synchronous Design
//!
//! `get_action()` is blocking. The orchestrator runs it on a worker thread
//! and stops listening at the deadline, so players must poll their own
//! deadline and return on time.

use std::fmt;

use crate::agent::ActionSlot;
use crate::error::AgentError;
use crate::game_repr::{GameState, PlayerId};

/// Result of a completed match, from the point of view of the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    FirstWins,
    SecondWins,
}

impl GameResult {
    /// Create a GameResult from the winning player
    pub fn from_winner(winner: PlayerId) -> Self {
        match winner {
            PlayerId::First => GameResult::FirstWins,
            PlayerId::Second => GameResult::SecondWins,
        }
    }

    pub fn winner(&self) -> PlayerId {
        match self {
            GameResult::FirstWins => PlayerId::First,
            GameResult::SecondWins => PlayerId::Second,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins", self.winner())
    }
}

/// Trait for entities that can provide actions.
///
/// # Method Behavior
///
/// ## `get_action()`
/// - **Blocking**: runs until the player has decided or its own deadline passed
/// - Announces the chosen action into `slot` at least once before returning
///   `Ok`, and returns that same action
/// - Returns `Err` only when it could not announce anything
///
/// ## `game_ended()`
/// - Default: Does nothing
///
/// ## `name()`
/// - Default: Returns "Player"
///
/// # Thread Safety
///
/// Implementations used by the orchestrator must be `Send`, since each turn
/// runs on a worker thread. Players never share search state with each other.
pub trait Player<S: GameState> {
    /// Choose an action for the current state and announce it.
    ///
    /// # Return Value
    ///
    /// - `Ok(action)`: the last action announced into `slot`
    /// - `Err(AgentError)`: nothing could be announced (terminal state, or a
    ///   non-terminal state without actions)
    fn get_action(&mut self, state: &S, slot: &ActionSlot<S::Action>) -> Result<S::Action, AgentError>;

    /// Seat this player occupies
    fn player_id(&self) -> PlayerId;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}

/// Shared preconditions for every player: the state must still be playable
/// and offer at least one action.
pub(crate) fn playable_actions<S: GameState>(state: &S) -> Result<crate::game_repr::ActionList<S::Action>, AgentError> {
    let ply = state.ply_count();
    if state.terminal_test() {
        return Err(AgentError::TerminalState { ply });
    }

    let actions = state.actions();
    if actions.is_empty() {
        return Err(AgentError::NoLegalMoves { ply });
    }

    Ok(actions)
}
