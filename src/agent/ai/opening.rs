//! Opening rule for the first plies: take a random free corner.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::game_repr::{BoardGeometry, GameState, PlayerId};

/// Corner placements open to `player`, in corner order. The corner the
/// opponent stands on is excluded.
pub fn corner_candidates<S: GameState>(
    state: &S,
    player: PlayerId,
    geometry: &BoardGeometry,
) -> SmallVec<[S::Action; 4]> {
    let opp_loc = state.locs()[player.opponent().index()];

    geometry
        .corners
        .iter()
        .filter(|&&corner| opp_loc != Some(corner))
        .filter_map(|&corner| state.placement(corner))
        .collect()
}

/// Pick one of the corner candidates uniformly at random.
/// `None` when no corner can be placed on.
pub fn corner_opening<S: GameState, R: Rng + ?Sized>(
    state: &S,
    player: PlayerId,
    geometry: &BoardGeometry,
    rng: &mut R,
) -> Option<S::Action> {
    corner_candidates(state, player, geometry).choose(rng).copied()
}
