use std::{fmt::Display, str::FromStr};

use crate::error::ParseMoveError;

/// A mark placed on `cell` of sub-board `board`. Both are row-major indices in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub board: usize,
    pub cell: usize,
}

impl Move {
    pub const fn new(board: usize, cell: usize) -> Self {
        Move { board, cell }
    }

    pub const fn in_bounds(self) -> bool {
        self.board < 9 && self.cell < 9
    }

    /// Coordinates on the flattened 9x9 grid as `(row, column)`.
    pub const fn global(self) -> (usize, usize) {
        (
            3 * (self.board / 3) + self.cell / 3,
            3 * (self.board % 3) + self.cell % 3,
        )
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.board, self.cell)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.trim().split(',').map(str::trim).collect();
        let [board, cell] = parts[..] else {
            return Err(ParseMoveError::Arity(parts.len()));
        };
        let index = |part: &str| -> Result<usize, ParseMoveError> {
            let n = part
                .parse::<usize>()
                .map_err(|_| ParseMoveError::NotANumber(part.to_string()))?;
            if n < 9 {
                Ok(n)
            } else {
                Err(ParseMoveError::OutOfRange(n))
            }
        };
        Ok(Move::new(index(board)?, index(cell)?))
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::ParseMoveError;

    #[test]
    fn parse() {
        assert_eq!("4,2".parse(), Ok(Move::new(4, 2)));
        assert_eq!(" 0 , 8 \n".parse(), Ok(Move::new(0, 8)));
        assert_eq!("4".parse::<Move>(), Err(ParseMoveError::Arity(1)));
        assert_eq!("1,2,3".parse::<Move>(), Err(ParseMoveError::Arity(3)));
        assert_eq!(
            "a,2".parse::<Move>(),
            Err(ParseMoveError::NotANumber("a".to_string()))
        );
        assert_eq!("9,0".parse::<Move>(), Err(ParseMoveError::OutOfRange(9)));
    }

    #[test]
    fn display_parses_back() {
        let m = Move::new(7, 3);
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[test]
    fn global_coordinates() {
        assert_eq!(Move::new(0, 0).global(), (0, 0));
        assert_eq!(Move::new(4, 4).global(), (4, 4));
        assert_eq!(Move::new(2, 5).global(), (1, 8));
        assert_eq!(Move::new(6, 7).global(), (8, 1));
    }
}
