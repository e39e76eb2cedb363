use std::{fmt::Debug, hash::Hash};

use crate::{
    error::GameError,
    game::MetaState,
    moves::Move,
    ordering::{Positioned, PreferenceTable},
    player::Player,
};

/// Rules of a two player, zero-sum game with perfect information.
///
/// Every method is a pure function of its arguments. A search may call them
/// on the same state as often as it likes.
pub trait GameModel {
    type State: Clone + Eq + Hash + Debug;
    type Move: Copy + Eq + Debug + Positioned;

    fn initialize(&self) -> Self::State;

    fn to_move(&self, state: &Self::State) -> Player;

    /// Moves `mover` may play. Empty when the game is over or when `mover`
    /// is not the side to move, so every listed move passes `transition`.
    fn legal_moves(&self, state: &Self::State, mover: Player) -> Vec<Self::Move>;

    fn transition(
        &self,
        state: &Self::State,
        m: Self::Move,
        mover: Player,
    ) -> Result<Self::State, GameError>;

    fn terminal(&self, state: &Self::State) -> bool;

    /// +1 if the first player won, -1 if the second did, 0 for a draw.
    fn utility(&self, state: &Self::State) -> Result<i32, GameError>;

    /// Canonical form, suitable as a hash map key. Idempotent.
    fn freeze(&self, state: &Self::State) -> Self::State {
        state.clone()
    }
}

/// Static knowledge a bounded search needs when it cannot see the end.
pub trait Heuristic: GameModel {
    fn evaluate(&self, state: &Self::State, perspective: Player) -> f64;

    /// Default weights for [`crate::MoveOrdering::Preference`].
    fn preference_table(&self) -> PreferenceTable;
}

/// Ultimate tic-tac-toe.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ultimate;

impl GameModel for Ultimate {
    type State = MetaState;
    type Move = Move;

    fn initialize(&self) -> MetaState {
        MetaState::initialize()
    }

    fn to_move(&self, state: &MetaState) -> Player {
        state.to_move()
    }

    fn legal_moves(&self, state: &MetaState, mover: Player) -> Vec<Move> {
        if mover == state.to_move() {
            state.legal_moves().to_vec()
        } else {
            Vec::new()
        }
    }

    fn transition(&self, state: &MetaState, m: Move, mover: Player) -> Result<MetaState, GameError> {
        state.transition(m, mover)
    }

    fn terminal(&self, state: &MetaState) -> bool {
        state.terminal()
    }

    fn utility(&self, state: &MetaState) -> Result<i32, GameError> {
        state.utility()
    }

    fn freeze(&self, state: &MetaState) -> MetaState {
        state.freeze()
    }
}

impl Heuristic for Ultimate {
    fn evaluate(&self, state: &MetaState, perspective: Player) -> f64 {
        state.evaluate(perspective)
    }

    fn preference_table(&self) -> PreferenceTable {
        PreferenceTable::ultimate()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameModel, Ultimate};
    use crate::{GameError, Move, Player};

    #[test]
    fn contract_walkthrough() {
        let model = Ultimate;
        let s = model.initialize();
        assert_eq!(model.to_move(&s), Player::X);
        assert_eq!(model.legal_moves(&s, Player::X).len(), 81);
        let s = model.freeze(&model.transition(&s, Move::new(0, 4), Player::X).unwrap());
        assert_eq!(model.legal_moves(&s, Player::O).len(), 9);
        assert!(model.legal_moves(&s, Player::X).is_empty());
        assert!(!model.terminal(&s));
        assert_eq!(model.utility(&s), Err(GameError::NotTerminal));
        assert_eq!(model.freeze(&model.freeze(&s)), model.freeze(&s));
    }
}
