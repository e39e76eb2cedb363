use crate::{game::MetaState, moves::Move, sub_board::SubBoard};

/// Quarter turn counterclockwise, as a map from old to new cell index.
const ROTATE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// Reflection across the middle column.
const MIRROR: [usize; 9] = [2, 1, 0, 5, 4, 3, 8, 7, 6];

/// Image of a 3x3 index under one of the 8 symmetries of the square.
///
/// Symmetries `0..4` are rotations, `4..8` mirror first and then rotate.
pub const fn image(index: usize, symmetry: usize) -> usize {
    let mut i = if symmetry >= 4 { MIRROR[index] } else { index };
    let mut turns = 0;
    while turns < symmetry % 4 {
        i = ROTATE[i];
        turns += 1;
    }
    i
}

/// The symmetry that undoes `symmetry`.
pub const fn inverse(symmetry: usize) -> usize {
    if symmetry < 4 {
        (4 - symmetry) % 4
    } else {
        // reflections are their own inverse
        symmetry
    }
}

pub trait Symmetry: Sized {
    fn symmetries(self) -> [Self; 8];
}

impl Symmetry for Move {
    fn symmetries(self) -> [Self; 8] {
        let mut sym = 0;
        [(); 8].map(|()| {
            let r = Move::new(image(self.board, sym), image(self.cell, sym));
            sym += 1;
            r
        })
    }
}

impl SubBoard {
    fn transformed(&self, symmetry: usize) -> Self {
        let mut cells = [None; 9];
        for (i, cell) in self.cells().into_iter().enumerate() {
            cells[image(i, symmetry)] = cell;
        }
        SubBoard::from_cells(cells)
    }
}

impl Symmetry for SubBoard {
    fn symmetries(self) -> [Self; 8] {
        let mut sym = 0;
        [(); 8].map(|()| {
            let r = self.transformed(sym);
            sym += 1;
            r
        })
    }
}

impl Symmetry for MetaState {
    fn symmetries(self) -> [Self; 8] {
        let mut states = [self; 8];
        for (sym, state) in states.iter_mut().enumerate().skip(1) {
            for (i, board) in self.boards.iter().enumerate() {
                state.boards[image(i, sym)] = board.transformed(sym);
            }
            state.active = self.active.map(|a| image(a, sym));
        }
        states
    }
}

impl MetaState {
    /// The smallest of the 8 symmetric images together with the index of the
    /// symmetry that produced it.
    pub fn canonical(self) -> (usize, Self) {
        let images = self.freeze().symmetries();
        let mut best = (0, images[0]);
        for (sym, state) in images.into_iter().enumerate().skip(1) {
            if state < best.1 {
                best = (sym, state);
            }
        }
        best
    }
}
