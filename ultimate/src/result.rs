use crate::{
    error::GameError,
    game::MetaState,
    game_result::GameResult,
    player::Cell,
    sub_board::SubBoard,
};

impl MetaState {
    /// Winner of each sub-board, in board order.
    pub fn meta_outcomes(&self) -> [Cell; 9] {
        self.boards.map(|board| board.winner())
    }

    /// Winner of the meta board, where each board counts as its winner's mark.
    pub fn meta_outcome(&self) -> Cell {
        SubBoard::from_cells(self.meta_outcomes()).winner()
    }

    /// The game ends with a line on the meta board or when no board is open.
    pub fn terminal(&self) -> bool {
        self.meta_outcome().is_some() || self.boards.iter().all(SubBoard::is_closed)
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        if let Some(winner) = self.meta_outcome() {
            GameResult::Winner(winner)
        } else if self.boards.iter().all(SubBoard::is_closed) {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// +1 if X won, -1 if O won, 0 for a draw.
    pub fn utility(&self) -> Result<i32, GameError> {
        self.result().utility().ok_or(GameError::NotTerminal)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GameError, GameResult, MetaState, Player, StateBuilder};

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);

    /// Full board with no line.
    const DRAWN: [Option<Player>; 9] = [X, O, X, X, O, O, O, X, X];

    #[test]
    fn ongoing_has_no_utility() {
        let state = MetaState::initialize();
        assert!(!state.terminal());
        assert_eq!(state.result(), GameResult::Ongoing);
        assert_eq!(state.utility(), Err(GameError::NotTerminal));
    }

    #[test]
    fn every_board_drawn() {
        let mut builder = StateBuilder::new();
        for board in 0..9 {
            builder.with_board(board, &DRAWN).unwrap();
        }
        let state = builder.freeze();
        assert!(state.terminal());
        assert_eq!(state.result(), GameResult::Draw);
        assert_eq!(state.utility(), Ok(0));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn closed_boards_without_meta_line() {
        // Boards are won in a drawn pattern on the meta level.
        let won_x = [X, X, X, O, O, None, None, None, None];
        let won_o = [O, O, O, X, X, None, X, None, None];
        let mut builder = StateBuilder::new();
        for (board, winner) in DRAWN.iter().enumerate() {
            let cells = if *winner == X { won_x } else { won_o };
            builder.with_board(board, &cells).unwrap();
        }
        let state = builder.freeze();
        assert_eq!(state.meta_outcome(), None);
        assert!(state.terminal());
        assert_eq!(state.utility(), Ok(0));
    }

    #[test]
    fn meta_line_wins() {
        let won_o = [O, None, None, O, None, None, O, None, None];
        let mut builder = StateBuilder::new();
        for board in [2, 4, 6] {
            builder.with_board(board, &won_o).unwrap();
        }
        let state = builder.freeze();
        assert!(state.terminal());
        assert_eq!(state.result(), GameResult::Winner(Player::O));
        assert_eq!(state.utility(), Ok(-1));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn single_full_board_is_not_terminal() {
        let mut builder = StateBuilder::new();
        builder.with_board(4, &DRAWN).unwrap();
        let state = builder.freeze();
        assert!(!state.terminal());
        assert_eq!(state.legal_moves().len(), 72);
    }
}
