use crate::{
    error::GameError,
    game::MetaState,
    player::{Cell, Player},
    sub_board::SubBoard,
};

/// Mutable scratch space for building a [`MetaState`].
///
/// Nothing in here is shared with a published state: converting a state into
/// a builder copies every cell out, and [`StateBuilder::freeze`] packs them
/// into a fresh value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateBuilder {
    cells: [[Cell; 9]; 9],
    to_move: Player,
    active: Option<usize>,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self {
            cells: [[None; 9]; 9],
            to_move: Player::X,
            active: None,
        }
    }
}

impl From<&MetaState> for StateBuilder {
    fn from(state: &MetaState) -> Self {
        Self {
            cells: state.boards.map(|board| board.cells()),
            to_move: state.to_move,
            active: state.active,
        }
    }
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single cell. Indices outside `0..9` are ignored.
    pub fn set(&mut self, board: usize, cell: usize, value: Cell) -> &mut Self {
        if let Some(slot) = self.cells.get_mut(board).and_then(|b| b.get_mut(cell)) {
            *slot = value;
        }
        self
    }

    /// Replace a whole sub-board. Fails unless `cells` has exactly 9 entries.
    pub fn with_board(&mut self, board: usize, cells: &[Cell]) -> Result<&mut Self, GameError> {
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| GameError::InvalidShape { len: cells.len() })?;
        let slot = self
            .cells
            .get_mut(board)
            .ok_or(GameError::InvalidBoardIndex(board))?;
        *slot = cells;
        Ok(self)
    }

    pub fn to_move(&mut self, player: Player) -> &mut Self {
        self.to_move = player;
        self
    }

    pub fn active(&mut self, active: Option<usize>) -> Result<&mut Self, GameError> {
        match active {
            Some(i) if i >= 9 => Err(GameError::InvalidActiveBoard(i)),
            _ => {
                self.active = active;
                Ok(self)
            }
        }
    }

    /// Publish the scratch space as an immutable state.
    pub fn freeze(&self) -> MetaState {
        MetaState {
            boards: self.cells.map(SubBoard::from_cells),
            to_move: self.to_move,
            active: self.active,
        }
        .freeze()
    }
}

impl MetaState {
    /// Canonical form of this state.
    ///
    /// A forced board that is already closed means the same thing as free
    /// choice, so it is stored as free choice. Equal positions therefore
    /// compare and hash equal however they were reached.
    #[must_use]
    pub fn freeze(self) -> Self {
        if self.free_choice() {
            MetaState {
                active: None,
                ..self
            }
        } else {
            self
        }
    }

    /// Build a state from nested cell buffers, one inner slice per board.
    pub fn from_cells<B: AsRef<[Cell]>>(
        boards: &[B],
        to_move: Player,
        active: Option<usize>,
    ) -> Result<Self, GameError> {
        if boards.len() != 9 {
            return Err(GameError::InvalidShape { len: boards.len() });
        }
        let mut builder = StateBuilder::new();
        for (i, board) in boards.iter().enumerate() {
            builder.with_board(i, board.as_ref())?;
        }
        builder.to_move(to_move).active(active)?;
        Ok(builder.freeze())
    }
}
