use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Cell index from row and column
pub fn cell(row: usize, col: usize) -> Cell {
    row * bitboards::ROW_STRIDE + col
}

/// Both players placed, first player to move
pub fn placed(first: Cell, second: Cell) -> Isolation {
    Isolation::play(&[Action::Place(first), Action::Place(second)]).expect("valid placements")
}

/// Check if a jump in `dir` is among the actions
pub fn has_jump(actions: &[Action], dir: Direction) -> bool {
    actions.contains(&Action::Jump(dir))
}

// ==================== TEST MODULES ====================

mod terminal;
