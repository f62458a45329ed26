// Position evaluation function
// Returns a heuristic score from one player's perspective (positive = good for that player)

use crate::game_repr::{BoardGeometry, Cell, GameState, PlayerId};

/// Weight of the distance-to-corner term
pub const CORNER_WEIGHT: f64 = 0.2;

/// Weight of the (negated) distance-to-opponent term
pub const OPPONENT_WEIGHT: f64 = 0.2;

/// Static evaluator for non-terminal states.
///
/// score = (own liberties - opponent liberties)
///       + 0.2 * (largest distance from own cell to a corner)
///       - 0.2 * (distance from own cell to the opponent)
///
/// Terminal states are scored by the rules engine's utility instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    geometry: BoardGeometry,
}

impl Evaluator {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self { geometry }
    }

    /// Heuristic value of `state` for `player`
    pub fn score<S: GameState>(&self, state: &S, player: PlayerId) -> f64 {
        let locs = state.locs();
        let own = locs[player.index()];
        let opp = locs[player.opponent().index()];

        self.mobility(state, player)
            + CORNER_WEIGHT * self.corner_term(own)
            + OPPONENT_WEIGHT * self.opponent_term(own, opp)
    }

    /// Own liberties minus opponent liberties. Antisymmetric in the player.
    pub fn mobility<S: GameState>(&self, state: &S, player: PlayerId) -> f64 {
        let locs = state.locs();
        let own = state.liberty_count(locs[player.index()]) as f64;
        let opp = state.liberty_count(locs[player.opponent().index()]) as f64;
        own - opp
    }

    /// Largest distance from `own` to any corner.
    ///
    /// This is the maximum, not the minimum: the heuristic rewards standing far
    /// from the farthest corner, and existing play was tuned with it. Zero
    /// before the player is placed.
    pub fn corner_term(&self, own: Option<Cell>) -> f64 {
        let Some(own) = own else {
            return 0.0;
        };

        self.geometry
            .corners
            .iter()
            .map(|&corner| self.geometry.distance(corner, own))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Negative distance between the two players; zero if either is unplaced
    pub fn opponent_term(&self, own: Option<Cell>, opp: Option<Cell>) -> f64 {
        match (own, opp) {
            (Some(own), Some(opp)) => -self.geometry.distance(opp, own),
            _ => 0.0,
        }
    }
}
