/// Outcome of a pursuit game. Stays `Ongoing` until one of the win
/// checks or the round limit fires; exactly one terminal state can
/// ever be reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    MouseWon,
    CatWon,
    Draw,
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Ongoing
    }
}
