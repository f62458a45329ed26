// AI Agent - Iterative deepening alpha-beta search
//
// This module implements the search agent for knight's Isolation:
// - Static evaluator (mobility, corner distance, opponent distance)
// - Depth-limited minimax with alpha-beta pruning, polling a deadline at every node
// - Iterative deepening driver keeping the best move across depths
// - Opening rule and move selection policy wrapping the driver
//
// Key properties:
// - Actions are searched in the rules engine's order, no reordering
// - No state survives between move decisions

mod alpha_beta;
mod alpha_beta_player;
mod ai_type;
mod config;
mod deadline;
mod evaluation;
mod opening;
mod search;

#[cfg(test)]
mod tests;

pub use alpha_beta::AlphaBeta;
pub use alpha_beta_player::{AlphaBetaPlayer, Difficulty};
pub use ai_type::{AIConfig, AIType, BoxedPlayer};
pub use config::{SearchConfig, DEFAULT_MAX_DEPTH, DEFAULT_OPENING_PLIES, DEFAULT_TIME_BUDGET};
pub use deadline::Deadline;
pub use evaluation::{Evaluator, CORNER_WEIGHT, OPPONENT_WEIGHT};
pub use opening::{corner_candidates, corner_opening};
pub use search::{iterative_deepening_search, SearchResult};
