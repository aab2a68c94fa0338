use std::{error::Error, fmt::Display};

/// Fatal setup problems, rejected before any round is played. Running
/// out of legal moves mid-game is not an error; a stuck agent simply
/// stays in place for the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetupError {
    GridSize(i32),
    SearchDepth(i32),
    MaxRounds(i32),
    ExitOverlap,
    OutOfBounds,
}

impl Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::GridSize(n) => {
                write!(f, "grid size must be at least 2 to fit a distinct exit (got {n})")
            }
            SetupError::SearchDepth(d) => {
                write!(f, "search depth cannot be negative (got {d})")
            }
            SetupError::MaxRounds(r) => {
                write!(f, "round limit must be at least 1 (got {r})")
            }
            SetupError::ExitOverlap => {
                write!(f, "the exit cannot share a cell with an agent's starting position")
            }
            SetupError::OutOfBounds => write!(f, "starting cell is not on the board"),
        }
    }
}

impl Error for SetupError {}
