/// Playable columns per row
pub const WIDTH: usize = 11;

/// Rows on the board
pub const HEIGHT: usize = 9;

/// Distance in bits between the first cells of two consecutive rows.
/// Each row carries two padding bits so knight offsets never wrap onto
/// the neighbouring row.
pub const ROW_STRIDE: usize = WIDTH + 2;

/// Number of addressable cell indices (the last row has no padding)
pub const BOARD_SIZE: usize = ROW_STRIDE * HEIGHT - 2;

/// Knight offsets in enumeration order: NNE, ENE, ESE, SSE, SSW, WSW, WNW, NNW
pub const KNIGHT_OFFSETS: [i32; 8] = [
    (ROW_STRIDE * 2 + 1) as i32,
    (ROW_STRIDE + 2) as i32,
    -(ROW_STRIDE as i32) + 2,
    -((ROW_STRIDE * 2) as i32) + 1,
    -((ROW_STRIDE * 2) as i32) - 1,
    -(ROW_STRIDE as i32) - 2,
    (ROW_STRIDE - 2) as i32,
    (ROW_STRIDE * 2 - 1) as i32,
];

/// Every playable cell set, padding bits clear
pub const BLANK_BOARD: u128 = generate_blank_board();

/// Precomputed knight reach tables
/// KNIGHT_REACH[cell] returns a bitboard of the playable cells a knight can jump to from that cell
pub static KNIGHT_REACH: [u128; BOARD_SIZE] = generate_knight_reach();

const fn generate_blank_board() -> u128 {
    let mut board = 0u128;
    let mut row = 0;

    while row < HEIGHT {
        board |= ((1u128 << WIDTH) - 1) << (row * ROW_STRIDE);
        row += 1;
    }

    board
}

/// Generate knight reach table at compile time
const fn generate_knight_reach() -> [u128; BOARD_SIZE] {
    let blank = generate_blank_board();
    let mut reach = [0u128; BOARD_SIZE];
    let mut cell = 0;

    while cell < BOARD_SIZE {
        let mut targets = 0u128;
        let mut i = 0;

        while i < 8 {
            let target = cell as i32 + KNIGHT_OFFSETS[i];
            if target >= 0 && (target as usize) < BOARD_SIZE {
                targets |= 1u128 << target;
            }
            i += 1;
        }

        // Padding cells are never reachable
        reach[cell] = targets & blank;
        cell += 1;
    }

    reach
}
