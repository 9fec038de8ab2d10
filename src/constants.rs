//! Board geometry and winning line masks.
//!
//! Cells are numbered row by row, and cell `i` is stored in bit `i`:
//!
//! ```text
//!  0  |  1  |  2
//!  3  |  4  |  5
//!  6  |  7  |  8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board width and height.
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Mask with every cell set.
pub const FULL: u16 = 0b111_111_111;

// =============================================================================
// Winning Lines
// =============================================================================

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [u16; 8] = [
    // Rows
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    // Columns
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    // Diagonals
    0b100_010_001,
    0b001_010_100,
];

// =============================================================================
// Display
// =============================================================================

/// Mark drawn for player 1.
pub const MARK_PLAYER1: char = 'x';

/// Mark drawn for player 2.
pub const MARK_PLAYER2: char = 'o';

/// Returns the one-hot bit for `position`, or `None` if it is not a cell.
#[inline]
pub fn cell_bit(position: usize) -> Option<u16> {
    (position < CELLS).then(|| 1 << position)
}
