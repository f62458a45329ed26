use super::bitboards::ROW_STRIDE;
use super::Cell;

/// Board layout constants the search engine scores against.
///
/// The engine does not own the board; it only needs the row stride used to
/// turn cell indices into grid distances and the four corner cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub row_width: usize,
    pub corners: [Cell; 4],
}

impl BoardGeometry {
    /// Geometry of the 11x9 knight's Isolation board
    pub const ISOLATION: BoardGeometry = BoardGeometry {
        row_width: ROW_STRIDE,
        corners: [0, 10, 104, 114],
    };

    /// Euclidean distance between two cells on the row/column grid.
    ///
    /// Row offset is `|to - from| / row_width`; column offset is
    /// `|to - row * row_width - from|`. For `to < from` the column term is not
    /// the true column difference; the evaluator is tuned against exactly this
    /// formula so it is kept as is.
    pub fn distance(&self, to: Cell, from: Cell) -> f64 {
        let width = self.row_width as i64;
        let (to, from) = (to as i64, from as i64);
        let dy = (to - from).abs() / width;
        let dx = (to - width * dy - from).abs();
        ((dx * dx + dy * dy) as f64).sqrt()
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::ISOLATION
    }
}
