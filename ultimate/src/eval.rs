use crate::{
    game::MetaState,
    player::Player,
    sub_board::{SubBoard, CENTER},
};

pub const WON_BOARD: f64 = 5.0;
pub const OPEN_TWO: f64 = 1.0;
pub const BOARD_CENTER: f64 = 0.5;
pub const META_WIN: f64 = 1000.0;
pub const META_CENTER: f64 = 1.0;

fn signed(cell: Option<Player>, perspective: Player, weight: f64) -> f64 {
    match cell {
        Some(player) if player == perspective => weight,
        Some(_) => -weight,
        None => 0.0,
    }
}

/// A won board counts [`WON_BOARD`] only. Open twos and the center bonus
/// apply to undecided boards.
fn board_score(board: &SubBoard, perspective: Player) -> f64 {
    if let Some(winner) = board.winner() {
        return signed(Some(winner), perspective, WON_BOARD);
    }
    let twos = f64::from(board.open_twos(perspective)) - f64::from(board.open_twos(!perspective));
    twos * OPEN_TWO + signed(board.get(CENTER), perspective, BOARD_CENTER)
}

impl MetaState {
    /// Static score of the position from `perspective`'s point of view.
    ///
    /// Hand tuned and linear. Only meant to rank positions the search could
    /// not resolve.
    pub fn evaluate(&self, perspective: Player) -> f64 {
        let local: f64 = self
            .boards
            .iter()
            .map(|board| board_score(board, perspective))
            .sum();
        let meta = signed(self.meta_outcome(), perspective, META_WIN);
        let center = signed(self.boards[CENTER].get(CENTER), perspective, META_CENTER);
        local + meta + center
    }
}
