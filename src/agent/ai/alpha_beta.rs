// Minimax Search with Alpha-Beta Pruning
//
// Two mutually recursive procedures alternate roles: `max_value` for plies
// where the searching player moves and `min_value` for the opponent's. Both
// share one alpha/beta window:
// - alpha: best value the maximizing player can already guarantee
// - beta: best value the minimizing player can already guarantee
// A branch is abandoned as soon as it cannot land inside the window.
//
// Time awareness: the deadline is polled before expanding each child. When it
// has passed, the node returns the value accumulated so far. Such values are
// bounds from a truncated subtree, usable only to compare moves.
//
// Actions are searched in the rules engine's enumeration order, without
// reordering.

use crate::game_repr::{GameState, PlayerId};
use super::deadline::Deadline;
use super::evaluation::Evaluator;
use super::search::SearchResult;

/// Depth-limited alpha-beta search for one player against one deadline.
pub struct AlphaBeta<'a> {
    player: PlayerId,
    evaluator: &'a Evaluator,
    deadline: Deadline,
    nodes: u64,
    interrupted: bool,
}

impl<'a> AlphaBeta<'a> {
    pub fn new(player: PlayerId, evaluator: &'a Evaluator, deadline: Deadline) -> Self {
        Self {
            player,
            evaluator,
            deadline,
            nodes: 0,
            interrupted: false,
        }
    }

    /// Nodes visited so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `state` to `depth_limit` plies and return the best root action.
    ///
    /// Ties between root actions go to the one enumerated later. If the
    /// deadline passes between root actions the search stops and returns the
    /// best action found so far with `completed == false`.
    ///
    /// With `depth_limit == 0` no action is expanded: the score is the
    /// state's static value (utility if terminal, otherwise the evaluator).
    pub fn search<S: GameState>(&mut self, state: &S, depth_limit: u8) -> SearchResult<S::Action> {
        if depth_limit == 0 {
            let score = self.max_value(state, f64::NEG_INFINITY, f64::INFINITY, 0);
            return self.finish(None, score, 0);
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for action in state.actions() {
            if self.deadline.expired() {
                self.interrupted = true;
                break;
            }

            let score = self.min_value(&state.result(action), alpha, beta, depth_limit - 1);
            alpha = alpha.max(score);

            // `>=` so that later actions win ties
            if score >= best_score {
                best_score = score;
                best_move = Some(action);
            }
        }

        self.finish(best_move, best_score, depth_limit)
    }

    fn finish<A>(&self, best_move: Option<A>, score: f64, depth: u8) -> SearchResult<A> {
        SearchResult {
            best_move,
            score,
            depth,
            completed: !self.interrupted,
            nodes: self.nodes,
            time_ms: self.deadline.elapsed().as_millis() as u64,
        }
    }

    /// Value of `state` when the searching player is to move
    pub fn max_value<S: GameState>(&mut self, state: &S, mut alpha: f64, beta: f64, depth: u8) -> f64 {
        self.nodes += 1;

        if state.terminal_test() {
            return state.utility(self.player);
        }
        if depth == 0 {
            return self.evaluator.score(state, self.player);
        }

        let mut value = f64::NEG_INFINITY;
        for action in state.actions() {
            if self.deadline.expired() {
                self.interrupted = true;
                return value;
            }

            value = value.max(self.min_value(&state.result(action), alpha, beta, depth - 1));
            if value >= beta {
                return value; // Beta cutoff
            }
            alpha = alpha.max(value);
        }

        value
    }

    /// Value of `state` when the opponent is to move
    pub fn min_value<S: GameState>(&mut self, state: &S, alpha: f64, mut beta: f64, depth: u8) -> f64 {
        self.nodes += 1;

        if state.terminal_test() {
            return state.utility(self.player);
        }
        if depth == 0 {
            return self.evaluator.score(state, self.player);
        }

        let mut value = f64::INFINITY;
        for action in state.actions() {
            if self.deadline.expired() {
                self.interrupted = true;
                return value;
            }

            value = value.min(self.max_value(&state.result(action), alpha, beta, depth - 1));
            if value <= alpha {
                return value; // Alpha cutoff
            }
            beta = beta.min(value);
        }

        value
    }
}
