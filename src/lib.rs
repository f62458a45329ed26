//! Time-bounded adversarial search agent for knight's Isolation.
//!
//! - [`game_repr`]: bitboard rules engine and the [`game_repr::GameState`] contract
//! - [`agent`]: players, the announce slot, and the alpha-beta search agent
//! - [`orchestrator`]: plays one match under a per-turn time limit
//! - [`tournament`]: runs many matches in parallel and reports win rates

pub mod agent;
pub mod error;
pub mod game_repr;
pub mod orchestrator;
pub mod tournament;
