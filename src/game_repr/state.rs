//! The rules-engine contract the search engine is written against.
//!
//! The engine never mutates a state. It only queries it and derives successors
//! through [`GameState::result`], so any immutable game representation that
//! answers these queries can be searched.

use std::fmt::{Debug, Display};

use smallvec::SmallVec;

use super::{Cell, PlayerId};

/// Action and liberty lists. Knight moves never exceed eight, so the inline
/// capacity only spills during the placement phase.
pub type ActionList<T> = SmallVec<[T; 8]>;

pub trait GameState: Clone {
    /// An action is only meaningful relative to the state that produced it.
    type Action: Copy + Eq + Debug + Display;

    /// Legal actions for the player to move. The order is stable for a given
    /// state and decides tie-breaks during search.
    fn actions(&self) -> ActionList<Self::Action>;

    /// Successor state after a legal `action`.
    ///
    /// Passing an action that `actions()` did not return breaks the contract;
    /// implementations may panic in debug builds.
    fn result(&self, action: Self::Action) -> Self;

    fn terminal_test(&self) -> bool;

    /// Outcome for `player`. Only meaningful when `terminal_test()` holds;
    /// by convention `+inf` for a win and `-inf` for a loss.
    fn utility(&self, player: PlayerId) -> f64;

    /// Open cells reachable from `loc`; every open cell when `loc` is `None`.
    fn liberties(&self, loc: Option<Cell>) -> ActionList<Cell>;

    /// Size of [`GameState::liberties`] without building the list.
    fn liberty_count(&self, loc: Option<Cell>) -> usize {
        self.liberties(loc).len()
    }

    /// Current location of each player, indexed by [`PlayerId::index`].
    fn locs(&self) -> [Option<Cell>; 2];

    fn ply_count(&self) -> u32;

    /// The action that occupies `cell` during the placement phase, or `None`
    /// when that is not legal here.
    fn placement(&self, cell: Cell) -> Option<Self::Action>;

    fn player(&self) -> PlayerId {
        PlayerId::from_ply(self.ply_count())
    }
}
