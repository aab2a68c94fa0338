use std::{process, thread::sleep, time::Duration};

use clap::Parser;
use log::{info, LevelFilter};
use mimalloc::MiMalloc;
use pursuit::{Config, Game, GameResult};
use rand::{rngs::StdRng, SeedableRng};

use crate::{cli::Args, render::draw_board};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod render;

fn main() {
    let args = Args::parse();
    simple_logging::log_to_stderr(LevelFilter::Info);

    let config = match Config::new(args.grid_size, args.depth, args.max_rounds) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&config, &mut rng);

    info!(
        "cat {:?}, mouse {:?}, exit {:?}",
        game.cat.pos, game.mouse.pos, game.exit
    );
    if !args.quiet {
        println!("{}", draw_board(&game));
    }

    while game.play_round() == GameResult::Ongoing {
        info!(
            "round {}: cat {:?}, mouse {:?}",
            game.round, game.cat.pos, game.mouse.pos
        );
        if !args.quiet {
            println!("{}", draw_board(&game));
        }
        sleep(Duration::from_millis(args.delay_ms));
    }

    if !args.quiet {
        println!("{}", draw_board(&game));
    }
    match game.result {
        GameResult::MouseWon => info!("the mouse got away"),
        GameResult::CatWon => info!("the cat caught the mouse"),
        GameResult::Draw => info!("round limit reached, draw"),
        GameResult::Ongoing => unreachable!(),
    }
}
