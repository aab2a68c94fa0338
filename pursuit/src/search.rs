use crate::{
    agent::{AgentKind, Trail},
    cell::Cell,
    eval::evaluate,
    grid::Grid,
    move_gen::legal_moves,
};

/// A candidate move together with its minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub cell: Cell,
    pub score: i32,
}

/// Fixed-depth minimax over a pursuit configuration. The cat
/// maximizes, the mouse minimizes.
///
/// Each ply moves only the player to act; the opponent is held where
/// it stands, so a node answers "what if I stood here, given where
/// you are now". Both trails are the ones captured at the selector
/// root and are never extended with hypothetical moves: the
/// no-backtrack rule binds relative to cells actually played, not
/// cells imagined during the search.
pub fn minimax(
    grid: Grid,
    cat: Cell,
    mouse: Cell,
    exit: Cell,
    depth: i32,
    maximizing: bool,
    cat_trail: &Trail,
    mouse_trail: &Trail,
) -> i32 {
    if cat == mouse || mouse == exit || depth == 0 {
        return evaluate(grid, cat, mouse, exit, depth);
    }

    if maximizing {
        legal_moves(grid, cat, AgentKind::Cat, cat_trail)
            .into_iter()
            .map(|to| minimax(grid, to, mouse, exit, depth - 1, false, cat_trail, mouse_trail))
            .max()
            // A cat with nowhere to go is as bad as it gets for the cat.
            .unwrap_or(i32::MIN)
    } else {
        legal_moves(grid, mouse, AgentKind::Mouse, mouse_trail)
            .into_iter()
            .map(|to| minimax(grid, cat, to, exit, depth - 1, true, cat_trail, mouse_trail))
            .min()
            .unwrap_or(i32::MAX)
    }
}

/// Pick the best immediate move for one agent, or `None` when it has
/// no legal move and must stay in place.
///
/// Candidates are scanned in offset order and only a strictly better
/// score displaces the incumbent, so ties go to the earliest offset.
pub fn select_best(
    grid: Grid,
    pos: Cell,
    opponent: Cell,
    exit: Cell,
    kind: AgentKind,
    cat_trail: &Trail,
    mouse_trail: &Trail,
    depth: i32,
) -> Option<Choice> {
    let trail = match kind {
        AgentKind::Cat => cat_trail,
        AgentKind::Mouse => mouse_trail,
    };

    let mut best: Option<Choice> = None;
    for cell in legal_moves(grid, pos, kind, trail) {
        let score = match kind {
            AgentKind::Cat => {
                minimax(grid, cell, opponent, exit, depth, false, cat_trail, mouse_trail)
            }
            AgentKind::Mouse => {
                minimax(grid, opponent, cell, exit, depth, true, cat_trail, mouse_trail)
            }
        };
        let better = match best {
            None => true,
            Some(incumbent) => match kind {
                AgentKind::Cat => score > incumbent.score,
                AgentKind::Mouse => score < incumbent.score,
            },
        };
        if better {
            best = Some(Choice { cell, score });
        }
    }
    best
}
