use crate::cell::Cell;

/// Square board geometry. Passed by value wherever moves are
/// generated or positions are scored; nothing else about the board is
/// shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub size: i32,
}

impl Grid {
    pub const fn new(size: i32) -> Self {
        Grid { size }
    }

    pub const fn contains(self, cell: Cell) -> bool {
        0 <= cell.row && cell.row < self.size && 0 <= cell.col && cell.col < self.size
    }

    pub fn manhattan(self, a: Cell, b: Cell) -> i32 {
        (a.row - b.row).abs() + (a.col - b.col).abs()
    }
}
