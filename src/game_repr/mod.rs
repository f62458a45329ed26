mod geometry;
mod moves;
mod player_id;
mod position;
mod state;
pub mod bitboards;

#[cfg(test)]
mod tests;

/// Index of a cell on the bitboard (row * row stride + column)
pub type Cell = usize;

pub use geometry::*;
pub use moves::*;
pub use player_id::*;
pub use position::*;
pub use state::*;
