use std::fmt;

use crate::constants::{CELLS, FULL, LINES, cell_bit};

/// Cells held by one player, one bit per cell.
///
/// Bit `i` is set when the player has a mark on cell `i`. Boards are plain
/// values; every operation returns a new board instead of mutating in place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board(u16);

impl Board {
    pub const fn empty() -> Self {
        Board(0)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Number of marks on the board.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when all 9 cells are set.
    pub const fn is_full(self) -> bool {
        self.0 == FULL
    }

    /// True when `cell` is set. Cells outside 0-8 are never set.
    pub fn contains(self, cell: usize) -> bool {
        cell_bit(cell).is_some_and(|bit| self.contains_mask(bit))
    }

    fn contains_mask(self, mask: u16) -> bool {
        self.0 & mask == mask
    }

    /// True when any of the 8 lines is fully held.
    pub fn is_complete(self) -> bool {
        self.completed_line().is_some()
    }

    /// Returns the first fully held line, if any.
    pub fn completed_line(self) -> Option<u16> {
        LINES.into_iter().find(|&line| self.contains_mask(line))
    }

    pub const fn union(self, other: Board) -> Board {
        Board(self.0 | other.0)
    }

    /// Returns a copy with `cell` set, or `None` if `cell` is out of range.
    pub fn with(self, cell: usize) -> Option<Board> {
        cell_bit(cell).map(|bit| Board(self.0 | bit))
    }

    /// Iterates the set cells in ascending order.
    pub fn cells(self) -> impl Iterator<Item = usize> {
        (0..CELLS).filter(move |&cell| self.contains(cell))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09b}", self.0)
    }
}
