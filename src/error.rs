//! Error types for the isolation agent

use thiserror::Error;

use crate::game_repr::{Action, Cell};

/// Violations of the Isolation rules, reported by [`crate::game_repr::Isolation::try_result`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("action {action} is not available at ply {ply}")]
    IllegalAction { ply: u32, action: Action },

    #[error("cell {cell} is off the board")]
    OffBoard { cell: i64 },

    #[error("cell {cell} is already blocked")]
    CellBlocked { cell: Cell },
}

/// Failures of a player's move selection
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentError {
    /// The state is not terminal but offers no action. The rules engine's
    /// `terminal_test` and `actions` disagree.
    #[error("no legal actions at non-terminal ply {ply}")]
    NoLegalMoves { ply: u32 },

    #[error("game is already over at ply {ply}")]
    TerminalState { ply: u32 },
}

/// Failures setting up a tournament
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TournamentError {
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("a tournament needs at least one game")]
    NoGames,
}
