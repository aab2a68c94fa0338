mod agent;
mod cell;
mod config;
mod error;
mod eval;
mod game;
mod game_result;
mod grid;
mod move_gen;
mod search;

pub use agent::{Agent, AgentKind, Trail, CAT_OFFSETS, MOUSE_OFFSETS};
pub use cell::Cell;
pub use config::{Config, GRID_SIZE, MAX_ROUNDS, SEARCH_DEPTH};
pub use error::SetupError;
pub use eval::{evaluate, WIN_SCORE};
pub use game::Game;
pub use game_result::GameResult;
pub use grid::Grid;
pub use move_gen::legal_moves;
pub use search::{minimax, select_best, Choice};
