// Iterative Deepening Search Orchestrator
//
// This module runs alpha-beta search at depth limits 1, 2, 3, ... up to
// max_depth, keeping the best move across iterations, until the deadline
// passes. The last iteration may be cut short; its move is still adopted when
// its (possibly truncated) score is at least as good as the best seen.

use log::debug;

use crate::game_repr::{GameState, PlayerId};
use super::alpha_beta::AlphaBeta;
use super::deadline::Deadline;
use super::evaluation::Evaluator;

/// Result of a search operation
///
/// `score` is exact only when `completed` is true. Otherwise it comes from a
/// truncated traversal and only serves to compare moves.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    pub best_move: Option<A>,
    pub score: f64,
    pub depth: u8,
    pub completed: bool,
    pub nodes: u64,
    pub time_ms: u64,
}

impl<A> SearchResult<A> {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            depth: 0,
            completed: false,
            nodes: 0,
            time_ms: 0,
        }
    }
}

impl<A> Default for SearchResult<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `state` - Current state to search
/// * `player` - Player the scores are computed for (the one to move)
/// * `evaluator` - Static evaluator used at the depth frontier
/// * `deadline` - Wall-clock cutoff shared by every iteration
/// * `max_depth` - Depth ceiling (at least 1 is always attempted)
///
/// # Returns
/// SearchResult whose `depth` is the most recently attempted depth limit and
/// whose `best_move` is the adopted move (None only when not even one root
/// action could be searched)
pub fn iterative_deepening_search<S: GameState>(
    state: &S,
    player: PlayerId,
    evaluator: &Evaluator,
    deadline: Deadline,
    max_depth: u8,
) -> SearchResult<S::Action> {
    let mut best_result = SearchResult::new();
    let mut total_nodes = 0u64;

    // Ensure we search at least depth 1
    let max_depth = max_depth.max(1);

    for depth in 1..=max_depth {
        let mut search = AlphaBeta::new(player, evaluator, deadline);
        let result = search.search(state, depth);
        total_nodes += result.nodes;

        best_result.depth = depth;
        best_result.completed = result.completed;
        best_result.nodes = total_nodes;

        // Later (deeper) iterations win ties
        if result.best_move.is_some() && result.score >= best_result.score {
            best_result.best_move = result.best_move;
            best_result.score = result.score;
        }

        best_result.time_ms = deadline.elapsed().as_millis() as u64;
        log_search_info(&result, &best_result);

        if deadline.expired() {
            break;
        }
    }

    best_result
}

/// Log information for one deepening iteration
fn log_search_info<A: std::fmt::Debug>(iteration: &SearchResult<A>, best: &SearchResult<A>) {
    let nps = if best.time_ms > 0 {
        (best.nodes as f64 / best.time_ms as f64 * 1000.0) as u64
    } else {
        best.nodes
    };

    debug!(
        "depth {} score {} completed {} nodes {} time {}ms nps {} best {:?}",
        iteration.depth,
        iteration.score,
        iteration.completed,
        best.nodes,
        best.time_ms,
        nps,
        best.best_move
    );
}
