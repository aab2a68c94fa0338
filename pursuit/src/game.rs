use rand::Rng;

use crate::{
    agent::{Agent, AgentKind},
    cell::Cell,
    config::Config,
    error::SetupError,
    game_result::GameResult,
    grid::Grid,
    search::select_best,
};

/// A running game: the grid, both agents, the exit, and progress
/// towards the round limit.
#[derive(Clone, Debug)]
pub struct Game {
    pub grid: Grid,
    pub cat: Agent,
    pub mouse: Agent,
    pub exit: Cell,
    pub round: u32,
    pub result: GameResult,
    pub search_depth: i32,
    pub max_rounds: u32,
}

fn random_cell(grid: Grid, rng: &mut impl Rng) -> Cell {
    Cell::new(rng.gen_range(0..grid.size), rng.gen_range(0..grid.size))
}

impl Game {
    /// Spawn both agents uniformly at random and re-roll the exit
    /// until it differs from both starting cells. The agents may
    /// share a spawn cell; the mouse moves first and gets away.
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let grid = Grid::new(config.grid_size);
        let cat = Agent::new(random_cell(grid, rng));
        let mouse = Agent::new(random_cell(grid, rng));
        let mut exit = random_cell(grid, rng);
        while exit == cat.pos || exit == mouse.pos {
            exit = random_cell(grid, rng);
        }
        Game {
            grid,
            cat,
            mouse,
            exit,
            round: 0,
            result: GameResult::Ongoing,
            search_depth: config.search_depth,
            max_rounds: config.max_rounds,
        }
    }

    /// Deterministic setup for tests and scripted games.
    pub fn with_positions(
        config: &Config,
        cat: Cell,
        mouse: Cell,
        exit: Cell,
    ) -> Result<Self, SetupError> {
        let grid = Grid::new(config.grid_size);
        if !(grid.contains(cat) && grid.contains(mouse) && grid.contains(exit)) {
            return Err(SetupError::OutOfBounds);
        }
        if exit == cat || exit == mouse {
            return Err(SetupError::ExitOverlap);
        }
        Ok(Game {
            grid,
            cat: Agent::new(cat),
            mouse: Agent::new(mouse),
            exit,
            round: 0,
            result: GameResult::Ongoing,
            search_depth: config.search_depth,
            max_rounds: config.max_rounds,
        })
    }

    /// Play one full round: mouse moves, escape check, cat moves,
    /// capture check, round limit. Does nothing once the game has
    /// ended. An agent with no legal move stays in place for the turn.
    pub fn play_round(&mut self) -> GameResult {
        if self.result != GameResult::Ongoing {
            return self.result;
        }

        if let Some(choice) = select_best(
            self.grid,
            self.mouse.pos,
            self.cat.pos,
            self.exit,
            AgentKind::Mouse,
            &self.cat.trail,
            &self.mouse.trail,
            self.search_depth,
        ) {
            self.mouse = self.mouse.moved(choice.cell);
        }
        if self.mouse.pos == self.exit {
            self.result = GameResult::MouseWon;
            return self.result;
        }

        if let Some(choice) = select_best(
            self.grid,
            self.cat.pos,
            self.mouse.pos,
            self.exit,
            AgentKind::Cat,
            &self.cat.trail,
            &self.mouse.trail,
            self.search_depth,
        ) {
            self.cat = self.cat.moved(choice.cell);
        }
        if self.cat.pos == self.mouse.pos {
            self.result = GameResult::CatWon;
            return self.result;
        }

        self.round += 1;
        if self.round >= self.max_rounds {
            self.result = GameResult::Draw;
        }
        self.result
    }

    /// Run rounds until the game ends.
    pub fn play(&mut self) -> GameResult {
        while self.result == GameResult::Ongoing {
            self.play_round();
        }
        self.result
    }
}
