use crate::{cell::Cell, grid::Grid};

/// Base magnitude of a terminal score. Adding the remaining depth on
/// top makes outcomes reached in fewer plies score further from zero,
/// and keeps terminal scores outside the heuristic's range.
pub const WIN_SCORE: i32 = 20;

/// Score a configuration at a terminal or cutoff point of the search.
/// Positive favours the cat, negative the mouse.
///
/// Capture is checked before escape, and both before the depth
/// cutoff. The cutoff heuristic rewards the mouse (lower score) for
/// standing close to the exit and far from the cat; it looks no
/// further than the search already has.
pub fn evaluate(grid: Grid, cat: Cell, mouse: Cell, exit: Cell, depth: i32) -> i32 {
    if cat == mouse {
        WIN_SCORE + depth
    } else if mouse == exit {
        -(WIN_SCORE + depth)
    } else {
        grid.manhattan(mouse, exit) - grid.manhattan(cat, mouse)
    }
}
