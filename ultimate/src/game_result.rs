use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Winner(Player),
    Draw,
    Ongoing,
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Ongoing
    }
}

impl GameResult {
    /// +1 when X won, -1 when O won, 0 for a draw. `None` while ongoing.
    pub const fn utility(self) -> Option<i32> {
        match self {
            GameResult::Winner(player) => Some(player.sign()),
            GameResult::Draw => Some(0),
            GameResult::Ongoing => None,
        }
    }
}
