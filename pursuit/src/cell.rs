/// A board coordinate, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    /// The cell reached by applying a (row, col) offset. May land off
    /// the board; callers filter with `Grid::contains`.
    #[must_use]
    pub const fn offset(self, delta: (i32, i32)) -> Self {
        Cell {
            row: self.row + delta.0,
            col: self.col + delta.1,
        }
    }
}
