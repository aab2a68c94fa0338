use pursuit::{Agent, Cell, Config, Game, GameResult, SetupError, Trail};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn fleeing_mouse_is_cut_off_in_the_corner() {
    // Wherever the corner mouse runs, the cat at (1, 1) can land on
    // it, so the first round ends in a capture before the counter
    // ever advances.
    let config = Config::new(6, 3, 13).unwrap();
    let mut game =
        Game::with_positions(&config, Cell::new(1, 1), Cell::new(0, 0), Cell::new(5, 5)).unwrap();
    assert_eq!(game.play_round(), GameResult::CatWon);
    assert_eq!(game.cat.pos, game.mouse.pos);
    assert_eq!(game.round, 0);
}

#[test]
fn mouse_next_to_the_exit_escapes_before_the_cat_moves() {
    let config = Config::new(6, 3, 13).unwrap();
    let mut game =
        Game::with_positions(&config, Cell::new(5, 5), Cell::new(0, 1), Cell::new(0, 0)).unwrap();
    assert_eq!(game.play_round(), GameResult::MouseWon);
    assert_eq!(game.mouse.pos, game.exit);
    assert_eq!(game.cat.pos, Cell::new(5, 5));
}

#[test]
fn out_of_reach_game_is_a_draw_at_the_round_limit() {
    // The mouse closes at most 2 cells on the exit per round against
    // a gap of 49, and the cat at most 4 on the mouse against a gap
    // of 98, so neither win can fire inside 13 rounds.
    let config = Config::new(50, 3, 13).unwrap();
    let mut game =
        Game::with_positions(&config, Cell::new(49, 49), Cell::new(0, 0), Cell::new(49, 0))
            .unwrap();
    assert_eq!(game.play(), GameResult::Draw);
    assert_eq!(game.round, 13);
}

#[test]
fn trail_blocked_cat_stays_put() {
    let config = Config::new(2, 3, 13).unwrap();
    let mut game =
        Game::with_positions(&config, Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 0)).unwrap();
    game.cat = Agent {
        pos: Cell::new(0, 0),
        trail: Trail::default()
            .record(Cell::new(1, 0))
            .record(Cell::new(0, 1)),
    };
    game.mouse = Agent {
        pos: Cell::new(1, 1),
        trail: Trail::default().record(Cell::new(1, 0)),
    };
    assert_eq!(game.play_round(), GameResult::Ongoing);
    assert_eq!(game.cat.pos, Cell::new(0, 0));
}

#[test]
fn the_exit_never_spawns_on_an_agent() {
    let config = Config::default();
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        let game = Game::new(&config, &mut rng);
        assert_ne!(game.exit, game.cat.pos);
        assert_ne!(game.exit, game.mouse.pos);
    }
}

#[test]
fn finished_games_stay_finished() {
    let config = Config::new(6, 3, 13).unwrap();
    let mut game =
        Game::with_positions(&config, Cell::new(5, 5), Cell::new(0, 1), Cell::new(0, 0)).unwrap();
    assert_eq!(game.play(), GameResult::MouseWon);
    let frozen = game.mouse.pos;
    assert_eq!(game.play_round(), GameResult::MouseWon);
    assert_eq!(game.mouse.pos, frozen);
}

#[test]
fn bad_setups_are_rejected() {
    assert_eq!(Config::new(0, 3, 13), Err(SetupError::GridSize(0)));
    assert_eq!(Config::new(1, 3, 13), Err(SetupError::GridSize(1)));
    assert_eq!(Config::new(6, -1, 13), Err(SetupError::SearchDepth(-1)));
    assert_eq!(Config::new(6, 3, 0), Err(SetupError::MaxRounds(0)));

    let config = Config::default();
    assert_eq!(
        Game::with_positions(&config, Cell::new(0, 0), Cell::new(1, 1), Cell::new(0, 0))
            .map(|_| ()),
        Err(SetupError::ExitOverlap)
    );
    assert_eq!(
        Game::with_positions(&config, Cell::new(0, 0), Cell::new(9, 9), Cell::new(5, 5))
            .map(|_| ()),
        Err(SetupError::OutOfBounds)
    );
}
