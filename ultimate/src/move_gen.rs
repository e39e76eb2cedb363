use arrayvec::ArrayVec;

use crate::{game::MetaState, moves::Move, sub_board::SubBoard};

/// Every move of a position fits here: at most 9 boards with 9 cells each.
pub type Moves = ArrayVec<Move, 81>;

impl MetaState {
    /// Legal moves for the side to move, board-major then cell-minor.
    ///
    /// Empty exactly when the game is over.
    pub fn legal_moves(&self) -> Moves {
        let mut moves = Moves::new();
        if self.meta_outcome().is_some() {
            return moves;
        }

        match self.active.filter(|_| !self.free_choice()) {
            Some(active) => add_cells(active, &self.boards[active], &mut moves),
            None => {
                for (index, board) in self.boards.iter().enumerate() {
                    if !board.is_closed() {
                        add_cells(index, board, &mut moves);
                    }
                }
            }
        }
        moves
    }

    /// Same as [`MetaState::legal_moves`] but appends to a caller owned buffer.
    pub fn possible_moves(&self, moves: &mut Vec<Move>) {
        moves.extend(self.legal_moves());
    }
}

fn add_cells(index: usize, board: &SubBoard, moves: &mut Moves) {
    moves.extend(board.empty_cells().map(|cell| Move::new(index, cell)));
}

#[cfg(test)]
mod tests {
    use crate::{MetaState, Move};

    #[test]
    fn opening_has_every_cell() {
        let moves = MetaState::initialize().legal_moves();
        assert_eq!(moves.len(), 81);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[80], Move::new(8, 8));
    }

    #[test]
    fn forced_board() {
        let state = MetaState::from_moves(&[Move::new(2, 5)]).unwrap();
        let moves = state.legal_moves();
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|m| m.board == 5));
    }

    #[test]
    fn possible_moves_appends() {
        let state = MetaState::from_moves(&[Move::new(2, 5)]).unwrap();
        let mut moves = vec![Move::new(0, 0)];
        state.possible_moves(&mut moves);
        assert_eq!(moves.len(), 10);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(&moves[1..], state.legal_moves().as_slice());
    }

    #[test]
    fn forced_board_skips_occupied_cells() {
        let state = MetaState::from_moves(&[Move::new(4, 4)]).unwrap();
        let moves = state.legal_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::new(4, 4)));
    }
}
