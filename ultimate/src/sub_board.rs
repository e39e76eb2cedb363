use crate::{
    error::GameError,
    player::{Cell, Player},
};

/// One bit per cell, bit `i` is cell `i` in row-major order.
pub(crate) type Mask = u16;

pub(crate) const FULL: Mask = 0b111_111_111;

/// Rows, then columns, then the two diagonals.
pub(crate) const LINES: [Mask; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

pub const CENTER: usize = 4;

/// A 3x3 board stored as two occupancy masks that never overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubBoard {
    x: Mask,
    o: Mask,
}

impl SubBoard {
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        let mut board = SubBoard::default();
        for (i, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(Player::X) => board.x |= 1 << i,
                Some(Player::O) => board.o |= 1 << i,
                None => {}
            }
        }
        board
    }

    pub fn cells(&self) -> [Cell; 9] {
        let mut cells = [None; 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = self.get(i);
        }
        cells
    }

    /// Get the contents of a cell. Cells outside `0..9` are reported as empty.
    pub fn get(&self, cell: usize) -> Cell {
        if cell >= 9 {
            None
        } else if self.x & (1 << cell) != 0 {
            Some(Player::X)
        } else if self.o & (1 << cell) != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    pub(crate) const fn marks(&self, player: Player) -> Mask {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    const fn occupied(&self) -> Mask {
        self.x | self.o
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        cell < 9 && self.occupied() & (1 << cell) == 0
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(|&cell| self.is_empty_cell(cell))
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == FULL
    }

    /// The owner of the first completed line, if any.
    pub fn winner(&self) -> Cell {
        LINES.iter().find_map(|&line| {
            if self.x & line == line {
                Some(Player::X)
            } else if self.o & line == line {
                Some(Player::O)
            } else {
                None
            }
        })
    }

    /// Won or full. Nobody may play on a closed board.
    pub fn is_closed(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Number of lines where `player` holds two cells and the third is empty.
    pub fn open_twos(&self, player: Player) -> u32 {
        let own = self.marks(player);
        let empty = !self.occupied() & FULL;
        LINES
            .iter()
            .filter(|&&line| (own & line).count_ones() == 2 && (empty & line).count_ones() == 1)
            .count() as u32
    }
}

impl TryFrom<&[Cell]> for SubBoard {
    type Error = GameError;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| GameError::InvalidShape { len: cells.len() })?;
        Ok(SubBoard::from_cells(cells))
    }
}

/// Outcome of a 3x3 board given as a slice of cells.
/// Returns `None` when no line is complete.
pub fn outcome(cells: &[Cell]) -> Result<Cell, GameError> {
    SubBoard::try_from(cells).map(|board| board.winner())
}
