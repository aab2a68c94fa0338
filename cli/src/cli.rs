use clap::Parser;

/// Watch a minimax cat chase a minimax mouse across a grid
#[derive(Parser)]
pub struct Args {
    /// Board width and height
    #[clap(short, long, default_value_t = pursuit::GRID_SIZE)]
    pub grid_size: i32,
    /// Plies of lookahead for both agents
    #[clap(short, long, default_value_t = pursuit::SEARCH_DEPTH)]
    pub depth: i32,
    /// Rounds before the game is called a draw
    #[clap(short, long, default_value_t = pursuit::MAX_ROUNDS)]
    pub max_rounds: i32,
    /// Seed for the spawn positions (random when omitted)
    #[clap(short, long)]
    pub seed: Option<u64>,
    /// Milliseconds to pause between rounds
    #[clap(long, default_value_t = 500)]
    pub delay_ms: u64,
    /// Skip the per-round board printout
    #[clap(short, long)]
    pub quiet: bool,
}
