mod connect_four;
mod error;
mod eval;
mod freeze;
mod game;
mod game_result;
mod model;
mod move_gen;
mod moves;
mod ordering;
mod player;
mod result;
mod sub_board;
mod symm;

pub use connect_four::{Column, ConnectFour, Grid, COLUMNS, ROWS};
pub use error::*;
pub use freeze::StateBuilder;
pub use game::MetaState;
pub use game_result::GameResult;
pub use model::{GameModel, Heuristic, Ultimate};
pub use move_gen::Moves;
pub use moves::Move;
pub use ordering::{MoveOrdering, Positioned, PreferenceTable};
pub use player::{Cell, Player};
pub use sub_board::{outcome, SubBoard, CENTER};
pub use symm::{image, inverse, Symmetry};

/// Number of leaf positions `depth` plies below `state`.
pub fn perf_count(state: MetaState, depth: usize) -> usize {
    if depth == 0 || state.terminal() {
        1
    } else if depth == 1 {
        state.legal_moves().len()
    } else {
        state
            .legal_moves()
            .into_iter()
            .filter_map(|m| state.transition(m, state.to_move()).ok())
            .map(|next| perf_count(next, depth - 1))
            .sum()
    }
}
