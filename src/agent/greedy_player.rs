//! Baseline player that looks one ply ahead and keeps as many liberties as possible.

use crate::agent::player::{playable_actions, Player};
use crate::agent::ActionSlot;
use crate::error::AgentError;
use crate::game_repr::{GameState, PlayerId};

pub struct GreedyPlayer {
    player_id: PlayerId,
    name: String,
}

impl GreedyPlayer {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            name: "Greedy".to_string(),
        }
    }

    /// Liberties the player keeps after taking `action`
    fn score<S: GameState>(&self, state: &S, action: S::Action) -> usize {
        let next = state.result(action);
        next.liberty_count(next.locs()[self.player_id.index()])
    }
}

impl<S: GameState> Player<S> for GreedyPlayer {
    fn get_action(&mut self, state: &S, slot: &ActionSlot<S::Action>) -> Result<S::Action, AgentError> {
        let actions = playable_actions(state)?;

        // Strictly greater keeps the earliest action on ties
        let mut best = actions[0];
        let mut best_score = self.score(state, best);
        for &action in actions.iter().skip(1) {
            let score = self.score(state, action);
            if score > best_score {
                best = action;
                best_score = score;
            }
        }

        slot.put(best);
        Ok(best)
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
