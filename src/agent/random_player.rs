//! Baseline player choosing uniformly among legal actions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::{playable_actions, Player};
use crate::agent::ActionSlot;
use crate::error::AgentError;
use crate::game_repr::{GameState, PlayerId};

pub struct RandomPlayer {
    player_id: PlayerId,
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn get_action(&mut self, state: &S, slot: &ActionSlot<S::Action>) -> Result<S::Action, AgentError> {
        let actions = playable_actions(state)?;
        // playable_actions guarantees at least one action
        let action = *actions.choose(&mut self.rng).unwrap_or(&actions[0]);
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
