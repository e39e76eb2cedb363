use std::{fmt::Display, str::FromStr};

use crate::{
    error::{GameError, IllegalMove, ParseMoveError},
    game_result::GameResult,
    model::{GameModel, Heuristic},
    ordering::{Positioned, PreferenceTable},
    player::{Cell, Player},
};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
const CONNECT: usize = 4;

/// Right, down, down-right and down-left as `(row, column)` steps.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub const THREE: f64 = 5.0;
pub const TWO: f64 = 1.0;

/// A piece dropped into a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(pub usize);

impl Positioned for Column {
    /// Column 3 is the middle of seven, so columns 2 and 4 tie.
    fn center_distance(&self) -> u32 {
        self.0.abs_diff(COLUMNS / 2) as u32
    }

    fn position(&self) -> usize {
        self.0
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Column {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let column = s
            .parse::<usize>()
            .map_err(|_| ParseMoveError::NotANumber(s.to_string()))?;
        if column < COLUMNS {
            Ok(Column(column))
        } else {
            Err(ParseMoveError::OutOfRange(column))
        }
    }
}

/// Connect four position. Row 0 is the top, pieces fall towards row 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grid {
    cells: [[Cell; COLUMNS]; ROWS],
    to_move: Player,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [[None; COLUMNS]; ROWS],
            to_move: Player::X,
        }
    }
}

impl Grid {
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells.get(row).and_then(|r| r.get(column)).copied().flatten()
    }

    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(Option::is_some)
    }

    fn cell_at(&self, row: isize, column: isize) -> Cell {
        if row < 0 || column < 0 {
            None
        } else {
            self.get(row as usize, column as usize)
        }
    }

    /// Whether the `len` cells starting at `(row, column)` in `direction`
    /// all belong to `player`.
    fn run(
        &self,
        row: usize,
        column: usize,
        (dr, dc): (isize, isize),
        len: usize,
        player: Player,
    ) -> bool {
        (0..len as isize).all(|i| {
            self.cell_at(row as isize + dr * i, column as isize + dc * i) == Some(player)
        })
    }

    fn count_runs(&self, len: usize, player: Player) -> usize {
        let mut count = 0;
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                count += DIRECTIONS
                    .iter()
                    .filter(|&&direction| self.run(row, column, direction, len, player))
                    .count();
            }
        }
        count
    }

    pub fn winner(&self) -> Cell {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.count_runs(CONNECT, player) > 0)
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        if let Some(winner) = self.winner() {
            GameResult::Winner(winner)
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    pub fn legal_moves(&self) -> Vec<Column> {
        if self.result() != GameResult::Ongoing {
            return Vec::new();
        }
        (0..COLUMNS)
            .filter(|&column| self.cells[0][column].is_none())
            .map(Column)
            .collect()
    }

    pub fn transition(&self, Column(column): Column, mover: Player) -> Result<Self, GameError> {
        if column >= COLUMNS {
            return Err(IllegalMove::OutOfBounds.into());
        } else if self.result() != GameResult::Ongoing {
            return Err(IllegalMove::GameOver.into());
        } else if mover != self.to_move {
            return Err(IllegalMove::NotYourTurn.into());
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column].is_none())
            .ok_or(IllegalMove::ColumnFull)?;

        let mut next = *self;
        next.cells[row][column] = Some(mover);
        next.to_move = mover.next();
        Ok(next)
    }

    pub fn play(&mut self, column: Column) -> Result<(), GameError> {
        *self = self.transition(column, self.to_move)?;
        Ok(())
    }

    pub fn from_moves(columns: &[usize]) -> Result<Self, GameError> {
        let mut grid = Self::default();
        for &column in columns {
            grid.play(Column(column))?;
        }
        Ok(grid)
    }

    /// Aligned threes are worth [`THREE`], aligned twos [`TWO`], positive
    /// for `perspective` and negative for the opponent.
    pub fn evaluate(&self, perspective: Player) -> f64 {
        let score = |player: Player| {
            self.count_runs(3, player) as f64 * THREE + self.count_runs(2, player) as f64 * TWO
        };
        score(perspective) - score(!perspective)
    }
}

/// Connect four on a 7x6 grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl GameModel for ConnectFour {
    type State = Grid;
    type Move = Column;

    fn initialize(&self) -> Grid {
        Grid::default()
    }

    fn to_move(&self, state: &Grid) -> Player {
        state.to_move()
    }

    fn legal_moves(&self, state: &Grid, mover: Player) -> Vec<Column> {
        if mover == state.to_move() {
            state.legal_moves()
        } else {
            Vec::new()
        }
    }

    fn transition(&self, state: &Grid, m: Column, mover: Player) -> Result<Grid, GameError> {
        state.transition(m, mover)
    }

    fn terminal(&self, state: &Grid) -> bool {
        state.result() != GameResult::Ongoing
    }

    fn utility(&self, state: &Grid) -> Result<i32, GameError> {
        state.result().utility().ok_or(GameError::NotTerminal)
    }
}

impl Heuristic for ConnectFour {
    fn evaluate(&self, state: &Grid, perspective: Player) -> f64 {
        state.evaluate(perspective)
    }

    fn preference_table(&self) -> PreferenceTable {
        PreferenceTable::connect_four()
    }
}
