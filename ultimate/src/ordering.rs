use std::cmp::Reverse;

use crate::{moves::Move, player::Player};

/// Moves that can be ranked by where they land.
pub trait Positioned {
    /// Manhattan distance from the middle of the playing area.
    fn center_distance(&self) -> u32;
    /// Index into a [`PreferenceTable`].
    fn position(&self) -> usize;
}

impl Positioned for Move {
    fn center_distance(&self) -> u32 {
        let (row, column) = self.global();
        (row.abs_diff(4) + column.abs_diff(4)) as u32
    }

    fn position(&self) -> usize {
        9 * self.board + self.cell
    }
}

/// Per player weights indexed by [`Positioned::position`]. Higher is tried first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceTable {
    weights: [Vec<i32>; 2],
}

impl PreferenceTable {
    pub fn new(x: Vec<i32>, o: Vec<i32>) -> Self {
        Self { weights: [x, o] }
    }

    /// Positions missing from the table weigh 0.
    pub fn weight(&self, player: Player, position: usize) -> i32 {
        self.weights[player.index()]
            .get(position)
            .copied()
            .unwrap_or_default()
    }

    /// Centre cells first, then corners, then edges, on both levels.
    pub fn ultimate() -> Self {
        const X: [i32; 9] = [3, 2, 3, 2, 5, 2, 3, 2, 3];
        const O: [i32; 9] = [3, 2, 3, 2, 4, 2, 3, 2, 3];
        let spread = |base: [i32; 9]| -> Vec<i32> {
            (0..81).map(|i| base[i / 9] + base[i % 9]).collect()
        };
        Self::new(spread(X), spread(O))
    }

    /// Central columns first. The first player leans harder on the middle.
    pub fn connect_four() -> Self {
        Self::new(vec![3, 6, 9, 12, 9, 6, 3], vec![5, 7, 9, 10, 9, 7, 5])
    }
}

/// Strategy the search uses to decide which moves to try first.
///
/// Every ordering is a stable sort, so ties keep the order in which the
/// moves were generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Keep the generation order.
    #[default]
    Enumeration,
    CenterDistance,
    Preference(PreferenceTable),
}

impl MoveOrdering {
    pub fn order<M: Positioned>(&self, moves: &mut [M], mover: Player) {
        match self {
            MoveOrdering::Enumeration => {}
            MoveOrdering::CenterDistance => moves.sort_by_key(Positioned::center_distance),
            MoveOrdering::Preference(table) => {
                moves.sort_by_key(|m| Reverse(table.weight(mover, m.position())));
            }
        }
    }

    /// Ordered copy of `moves`.
    pub fn ordered<M: Positioned + Clone>(&self, moves: &[M], mover: Player) -> Vec<M> {
        let mut moves = moves.to_vec();
        self.order(&mut moves, mover);
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveOrdering, Positioned, PreferenceTable};
    use crate::{MetaState, Move, Player};

    #[test]
    fn center_distance_on_flattened_grid() {
        assert_eq!(Move::new(4, 4).center_distance(), 0);
        assert_eq!(Move::new(0, 0).center_distance(), 8);
        assert_eq!(Move::new(1, 7).center_distance(), 2);
        assert_eq!(Move::new(5, 3).center_distance(), 2);
        assert_eq!(Move::new(4, 7).center_distance(), 1);
    }

    #[test]
    fn center_first_is_stable() {
        let moves = MetaState::initialize().legal_moves();
        let ordered = MoveOrdering::CenterDistance.ordered(&moves, Player::X);
        assert_eq!(ordered[0], Move::new(4, 4));
        // distance 1, in generation order
        assert_eq!(&ordered[1..5], &[
            Move::new(4, 1),
            Move::new(4, 3),
            Move::new(4, 5),
            Move::new(4, 7)
        ]);
        assert_eq!(ordered.len(), 81);
    }

    #[test]
    fn preference_table_descending() {
        let table = PreferenceTable::ultimate();
        let moves = MetaState::initialize().legal_moves();
        let ordered = MoveOrdering::Preference(table.clone()).ordered(&moves, Player::O);
        assert_eq!(ordered[0], Move::new(4, 4));
        assert!(ordered
            .windows(2)
            .all(|w| table.weight(Player::O, w[0].position())
                >= table.weight(Player::O, w[1].position())));
    }

    #[test]
    fn enumeration_keeps_order() {
        let moves = MetaState::initialize().legal_moves();
        assert_eq!(
            MoveOrdering::Enumeration.ordered(&moves, Player::X),
            moves.to_vec()
        );
    }

    #[test]
    fn missing_weights_are_zero() {
        let table = PreferenceTable::new(vec![1], vec![]);
        assert_eq!(table.weight(Player::X, 0), 1);
        assert_eq!(table.weight(Player::X, 5), 0);
        assert_eq!(table.weight(Player::O, 0), 0);
    }
}
