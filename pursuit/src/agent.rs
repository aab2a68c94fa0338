use arrayvec::ArrayVec;

use crate::cell::Cell;

/// Offsets a cat may move by: orthogonal single steps and two-cell
/// leaps. The leap lets it cut off the mouse's diagonal escapes.
pub const CAT_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
];

/// Offsets a mouse may move by: single orthogonal and diagonal steps.
pub const MOUSE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Cat,
    Mouse,
}

impl AgentKind {
    /// The fixed offset table for this kind. Order matters: move
    /// generation and tie-breaking both scan it left to right.
    pub const fn offsets(self) -> &'static [(i32, i32); 8] {
        match self {
            AgentKind::Cat => &CAT_OFFSETS,
            AgentKind::Mouse => &MOUSE_OFFSETS,
        }
    }
}

/// The last two cells an agent occupied, oldest evicted first.
///
/// Moving back onto a trail cell is forbidden, which stops an agent
/// oscillating between two cells. Revisiting a cell from three or
/// more moves ago is allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail(ArrayVec<Cell, 2>);

impl Trail {
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// A new trail with `cell` recorded on the end.
    #[must_use]
    pub fn record(&self, cell: Cell) -> Trail {
        let mut cells = self.0.clone();
        if cells.is_full() {
            cells.remove(0);
        }
        cells.push(cell);
        Trail(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One player's piece: where it stands and where it just came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    pub pos: Cell,
    pub trail: Trail,
}

impl Agent {
    pub fn new(pos: Cell) -> Self {
        Agent {
            pos,
            trail: Trail::default(),
        }
    }

    /// The successor agent after stepping to `to`. The old value is
    /// untouched so the sequencer can thread states explicitly.
    #[must_use]
    pub fn moved(&self, to: Cell) -> Agent {
        Agent {
            pos: to,
            trail: self.trail.record(to),
        }
    }
}
