use crate::{
    error::{GameError, IllegalMove},
    freeze::StateBuilder,
    moves::Move,
    player::{Cell, Player},
    sub_board::SubBoard,
};

/// Full position of an ultimate tic-tac-toe game.
///
/// A `MetaState` is a plain value. Playing a move never touches the state it
/// was played on, so a search can hold on to a parent while it explores the
/// children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetaState {
    pub(crate) boards: [SubBoard; 9],
    pub(crate) to_move: Player,
    pub(crate) active: Option<usize>,
}

impl Default for MetaState {
    fn default() -> Self {
        Self {
            boards: [SubBoard::default(); 9],
            to_move: Player::X,
            active: None,
        }
    }
}

impl MetaState {
    /// Empty boards, X to move, any board playable.
    pub fn initialize() -> Self {
        Self::default()
    }

    pub const fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    pub fn board(&self, index: usize) -> Option<&SubBoard> {
        self.boards.get(index)
    }

    pub fn get(&self, m: Move) -> Cell {
        self.board(m.board).and_then(|board| board.get(m.cell))
    }

    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// The board the next move is forced onto, or `None` for free choice.
    pub const fn active_board(&self) -> Option<usize> {
        self.active
    }

    /// Same as [`MetaState::active_board`] with free choice encoded as -1.
    pub fn active_index(&self) -> i8 {
        self.active.map_or(-1, |i| i as i8)
    }

    /// Number of marks on all boards.
    pub fn ply(&self) -> u32 {
        self.boards
            .iter()
            .map(|board| board.marks(Player::X).count_ones() + board.marks(Player::O).count_ones())
            .sum()
    }

    /// Whether the next move may go anywhere instead of a single board.
    pub fn free_choice(&self) -> bool {
        self.active
            .and_then(|i| self.boards.get(i))
            .map_or(true, SubBoard::is_closed)
    }

    fn check(&self, m: Move, mover: Player) -> Result<(), IllegalMove> {
        if !m.in_bounds() {
            Err(IllegalMove::OutOfBounds)
        } else if self.meta_outcome().is_some() || self.boards.iter().all(SubBoard::is_closed) {
            Err(IllegalMove::GameOver)
        } else if mover != self.to_move {
            Err(IllegalMove::NotYourTurn)
        } else if self.boards[m.board].is_closed() {
            Err(IllegalMove::ClosedBoard)
        } else if let Some(active) = self.active.filter(|_| !self.free_choice()) {
            if active == m.board {
                self.check_cell(m)
            } else {
                Err(IllegalMove::WrongBoard { active })
            }
        } else {
            self.check_cell(m)
        }
    }

    fn check_cell(&self, m: Move) -> Result<(), IllegalMove> {
        if self.boards[m.board].is_empty_cell(m.cell) {
            Ok(())
        } else {
            Err(IllegalMove::Occupied)
        }
    }

    /// Place `mover`'s mark and return the resulting state.
    ///
    /// The cell that was played selects the next board. If that board is
    /// won or full after the move, the opponent may play on any open board.
    pub fn transition(&self, m: Move, mover: Player) -> Result<Self, GameError> {
        self.check(m, mover)?;

        let mut scratch = StateBuilder::from(self);
        scratch.set(m.board, m.cell, Some(mover));
        scratch.to_move(mover.next());
        let next = scratch.freeze();

        let active = if next.boards[m.cell].is_closed() {
            None
        } else {
            Some(m.cell)
        };
        Ok(MetaState { active, ..next })
    }

    /// Play a move for the side to move.
    pub fn play(&mut self, m: Move) -> Result<(), GameError> {
        *self = self.transition(m, self.to_move)?;
        Ok(())
    }

    /// Play a sequence of moves from the initial position.
    pub fn from_moves(moves: &[Move]) -> Result<Self, GameError> {
        let mut state = Self::initialize();
        for &m in moves {
            state.play(m)?;
        }
        Ok(state)
    }
}
