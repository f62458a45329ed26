use std::fmt;

use super::bitboards::{cells, is_set, pop_lsb, BLANK_BOARD, BOARD_SIZE, HEIGHT, KNIGHT_REACH, ROW_STRIDE, WIDTH};
use super::{Action, ActionList, Cell, Direction, GameState, PlayerId};
use crate::error::RulesError;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Immutable snapshot of a knight's Isolation game.
///
/// `open` has a bit set for every cell that can still be entered. Each move
/// closes the destination cell, so the board only ever shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isolation {
    open: u128,
    ply_count: u32,
    locs: [Option<Cell>; 2],
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Isolation {
    pub fn new() -> Self {
        Self {
            open: BLANK_BOARD,
            ply_count: 0,
            locs: [None, None],
        }
    }

    /// Replay a sequence of actions from the empty board
    pub fn play(actions: &[Action]) -> Result<Self, RulesError> {
        actions
            .iter()
            .try_fold(Self::new(), |state, &action| state.try_result(action))
    }

    /// Close extra cells, e.g. to set up a position in tests or puzzles.
    /// Off-board indices are ignored.
    pub fn with_blocked(mut self, blocked: &[Cell]) -> Self {
        for &cell in blocked {
            if cell < BOARD_SIZE {
                self.open &= !(1u128 << cell);
            }
        }
        self
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        is_set(self.open, cell)
    }

    /// Cell the player to move would occupy after `action`, if the action is legal
    pub fn destination(&self, action: Action) -> Result<Cell, RulesError> {
        let illegal = RulesError::IllegalAction {
            ply: self.ply_count,
            action,
        };

        let cell = match (self.locs[self.player().index()], action) {
            (None, Action::Place(cell)) => {
                if cell >= BOARD_SIZE {
                    return Err(RulesError::OffBoard { cell: cell as i64 });
                }
                cell
            }
            (Some(from), Action::Jump(dir)) => dir.target(from).ok_or(RulesError::OffBoard {
                cell: from as i64 + dir.offset() as i64,
            })?,
            _ => return Err(illegal),
        };

        if !self.is_open(cell) {
            return Err(RulesError::CellBlocked { cell });
        }

        Ok(cell)
    }

    /// Checked successor state
    pub fn try_result(&self, action: Action) -> Result<Self, RulesError> {
        let cell = self.destination(action)?;
        let mut locs = self.locs;
        locs[self.player().index()] = Some(cell);

        Ok(Self {
            open: self.open & !(1u128 << cell),
            ply_count: self.ply_count + 1,
            locs,
        })
    }

    fn has_liberties(&self, player: PlayerId) -> bool {
        match self.locs[player.index()] {
            None => self.open != 0,
            Some(loc) => KNIGHT_REACH[loc] & self.open != 0,
        }
    }
}

impl GameState for Isolation {
    type Action = Action;

    fn actions(&self) -> ActionList<Action> {
        match self.locs[self.player().index()] {
            None => {
                let mut open = self.open;
                let mut actions = ActionList::with_capacity(open.count_ones() as usize);
                while open != 0 {
                    actions.push(Action::Place(pop_lsb(&mut open)));
                }
                actions
            }
            Some(loc) => Direction::ALL
                .iter()
                .filter(|dir| dir.target(loc).is_some_and(|cell| self.is_open(cell)))
                .map(|&dir| Action::Jump(dir))
                .collect(),
        }
    }

    fn result(&self, action: Action) -> Self {
        // Only actions from `actions()` may be passed here; use `try_result`
        // for anything else. Release builds leave the state unchanged.
        let next = self.try_result(action);
        debug_assert!(next.is_ok(), "result() called with illegal action {} at ply {}", action, self.ply_count);
        next.unwrap_or(*self)
    }

    fn terminal_test(&self) -> bool {
        !(self.has_liberties(PlayerId::First) && self.has_liberties(PlayerId::Second))
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.terminal_test() {
            return 0.0;
        }

        let to_move = self.player();
        // The player to move wins only if the stuck player is the opponent
        let to_move_wins = self.has_liberties(to_move);
        if to_move_wins == (player == to_move) {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    }

    fn liberties(&self, loc: Option<Cell>) -> ActionList<Cell> {
        match loc {
            None => cells(self.open).into_iter().collect(),
            Some(loc) => Direction::ALL
                .iter()
                .filter_map(|dir| dir.target(loc))
                .filter(|&cell| self.is_open(cell))
                .collect(),
        }
    }

    fn liberty_count(&self, loc: Option<Cell>) -> usize {
        match loc {
            None => self.open.count_ones() as usize,
            Some(loc) if loc < BOARD_SIZE => (KNIGHT_REACH[loc] & self.open).count_ones() as usize,
            Some(_) => 0,
        }
    }

    fn locs(&self) -> [Option<Cell>; 2] {
        self.locs
    }

    fn ply_count(&self) -> u32 {
        self.ply_count
    }

    fn placement(&self, cell: Cell) -> Option<Action> {
        let action = Action::Place(cell);
        self.destination(action).ok().map(|_| action)
    }
}

impl fmt::Display for Isolation {
    /// Top row first; `1`/`2` mark the players, `.` open cells, `#` blocked cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for col in 0..WIDTH {
                let cell = row * ROW_STRIDE + col;
                let mark = if self.locs[0] == Some(cell) {
                    '1'
                } else if self.locs[1] == Some(cell) {
                    '2'
                } else if self.is_open(cell) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", mark)?;
                if col + 1 < WIDTH {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
