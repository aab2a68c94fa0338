use pursuit::{Cell, Game};

/// ASCII snapshot of the board: `C` cat, `M` mouse, `E` exit. When
/// the cat has just caught the mouse they share a cell and the cat is
/// drawn on top.
pub fn draw_board(game: &Game) -> String {
    let mut out = String::new();
    for row in 0..game.grid.size {
        for col in 0..game.grid.size {
            let cell = Cell::new(row, col);
            out.push(if game.cat.pos == cell {
                'C'
            } else if game.mouse.pos == cell {
                'M'
            } else if game.exit == cell {
                'E'
            } else {
                '.'
            });
            out.push(' ');
        }
        out.pop();
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pursuit::{Cell, Config, Game};

    use super::draw_board;

    #[test]
    fn all_three_pieces_are_drawn() {
        let config = Config::new(3, 3, 13).unwrap();
        let game =
            Game::with_positions(&config, Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2))
                .unwrap();
        assert_eq!(draw_board(&game), "C . .\n. M .\n. . E\n");
    }
}
