use arrayvec::ArrayVec;

use crate::{
    agent::{AgentKind, Trail},
    cell::Cell,
    grid::Grid,
};

/// Enumerate the legal moves for an agent standing on `pos`.
///
/// Candidates are produced in the kind's fixed offset order, keeping
/// those that stay on the board and do not re-enter a cell on the
/// agent's own trail. An empty result means the agent has no legal
/// move this turn; that is the selector's problem, not an error.
pub fn legal_moves(grid: Grid, pos: Cell, kind: AgentKind, trail: &Trail) -> ArrayVec<Cell, 8> {
    kind.offsets()
        .iter()
        .map(|&offset| pos.offset(offset))
        .filter(|&cell| grid.contains(cell) && !trail.contains(cell))
        .collect()
}
