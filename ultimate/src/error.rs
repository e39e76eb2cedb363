use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameError {
    InvalidShape { len: usize },
    InvalidActiveBoard(usize),
    InvalidBoardIndex(usize),
    IllegalMove(IllegalMove),
    NotTerminal,
}

impl Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidShape { len } => {
                write!(f, "a sub-board must have exactly 9 cells (got {len})")
            }
            GameError::InvalidActiveBoard(index) => {
                write!(f, "active board must be between 0 and 8 (got {index})")
            }
            GameError::InvalidBoardIndex(index) => {
                write!(f, "board index must be between 0 and 8 (got {index})")
            }
            GameError::IllegalMove(illegal) => illegal.fmt(f),
            GameError::NotTerminal => write!(f, "utility is only defined for terminal states"),
        }
    }
}

impl Error for GameError {}

impl From<IllegalMove> for GameError {
    fn from(e: IllegalMove) -> Self {
        GameError::IllegalMove(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    OutOfBounds,
    GameOver,
    NotYourTurn,
    ClosedBoard,
    WrongBoard { active: usize },
    Occupied,
    ColumnFull,
}

impl Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::WrongBoard { active } => {
                write!(f, "the move must be played on board {active}")
            }
            _ => write!(f, "{}", match self {
                IllegalMove::OutOfBounds => "the move is not on the board",
                IllegalMove::GameOver => "the game is already over",
                IllegalMove::NotYourTurn => "it is the other player's turn",
                IllegalMove::ClosedBoard => "that board is already won or full",
                IllegalMove::Occupied => "cannot play there because the cell is already occupied",
                IllegalMove::ColumnFull => "that column is full",
                IllegalMove::WrongBoard { .. } => unreachable!(),
            }),
        }
    }
}

impl Error for IllegalMove {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    Arity(usize),
    NotANumber(String),
    OutOfRange(usize),
}

impl Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMoveError::Arity(parts) => {
                write!(f, "expected a move like \"4,2\" (board, cell), got {parts} part(s)")
            }
            ParseMoveError::NotANumber(part) => write!(f, "{part:?} is not a number"),
            ParseMoveError::OutOfRange(n) => write!(f, "{n} is out of range"),
        }
    }
}

impl Error for ParseMoveError {}
