use crate::error::SetupError;

// game settings
pub const GRID_SIZE: i32 = 6;
pub const SEARCH_DEPTH: i32 = 3;
pub const MAX_ROUNDS: i32 = 13;

/// Validated game parameters. Construction is the only place bad
/// values can be rejected; past it the engine assumes they hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub grid_size: i32,
    pub search_depth: i32,
    pub max_rounds: u32,
}

impl Config {
    pub fn new(grid_size: i32, search_depth: i32, max_rounds: i32) -> Result<Self, SetupError> {
        if grid_size < 2 {
            // A 1x1 board cannot hold an exit distinct from the agents.
            return Err(SetupError::GridSize(grid_size));
        }
        if search_depth < 0 {
            return Err(SetupError::SearchDepth(search_depth));
        }
        if max_rounds < 1 {
            return Err(SetupError::MaxRounds(max_rounds));
        }
        Ok(Config {
            grid_size,
            search_depth,
            max_rounds: max_rounds as u32,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: GRID_SIZE,
            search_depth: SEARCH_DEPTH,
            max_rounds: MAX_ROUNDS as u32,
        }
    }
}
