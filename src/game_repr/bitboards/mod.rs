pub mod tables;
pub use tables::*;

/// Pop the least significant bit and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u128) -> usize {
    let cell = bb.trailing_zeros() as usize;
    *bb &= *bb - 1; // Clear the LSB
    cell
}

/// Check whether `cell` is set in the bitboard
#[inline(always)]
pub fn is_set(bb: u128, cell: usize) -> bool {
    cell < BOARD_SIZE && bb & (1u128 << cell) != 0
}

/// Collect set cells in ascending index order
pub fn cells(mut bb: u128) -> Vec<usize> {
    let mut out = Vec::with_capacity(bb.count_ones() as usize);
    while bb != 0 {
        out.push(pop_lsb(&mut bb));
    }
    out
}
