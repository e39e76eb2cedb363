use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use ultimate::*;

const SEEDS: [u64; 8] = [
    5_915_587_277,
    1_500_450_271,
    3_267_000_013,
    5_754_853_343,
    4_093_082_899,
    9_576_890_767,
    3_628_273_133,
    2_860_486_313,
];

/// Random legal games, checking every reachable state on the way.
fn random_game(seed: u64, check: impl Fn(&MetaState, &MetaState, Move)) -> MetaState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = MetaState::initialize();
    while let Some(&m) = state.legal_moves().choose(&mut rng) {
        let next = state.transition(m, state.to_move()).unwrap().freeze();
        check(&state, &next, m);
        state = next;
    }
    state
}

#[test]
fn active_board_is_never_closed() {
    for seed in SEEDS {
        random_game(seed, |_, next, _| {
            if let Some(active) = next.active_board() {
                assert!(!next.board(active).unwrap().is_closed());
            }
        });
    }
}

#[test]
fn transition_does_not_alias() {
    for seed in SEEDS {
        random_game(seed, |state, _, _| {
            let before = *state;
            let moves = state.legal_moves();
            let children: Vec<_> = moves
                .iter()
                .map(|&m| state.transition(m, state.to_move()).unwrap())
                .collect();
            assert_eq!(*state, before);
            // Replaying from a fresh copy gives the same children.
            for (&m, child) in moves.iter().zip(&children) {
                assert_eq!(before.transition(m, before.to_move()).unwrap(), *child);
            }
        });
    }
}

#[test]
fn terminal_iff_utility() {
    for seed in SEEDS {
        let end = random_game(seed, |state, _, _| {
            assert!(!state.terminal());
            assert_eq!(state.utility(), Err(GameError::NotTerminal));
        });
        assert!(end.terminal());
        assert!(end.utility().is_ok());
        assert!(end.legal_moves().is_empty());
    }
}

#[test]
fn decided_boards_stay_decided() {
    for seed in SEEDS {
        random_game(seed, |state, next, _| {
            for (before, after) in state.boards().iter().zip(next.boards()) {
                if before.winner().is_some() {
                    assert_eq!(before, after);
                }
            }
        });
    }
}

#[test]
fn freeze_is_idempotent() {
    for seed in SEEDS {
        random_game(seed, |state, next, _| {
            assert_eq!(state.freeze().freeze(), state.freeze());
            assert_eq!(StateBuilder::from(next).freeze(), *next);
        });
    }
}

#[test]
fn move_generation_is_sound_and_complete() {
    for seed in SEEDS {
        random_game(seed, |state, _, _| {
            let legal = state.legal_moves();
            for board in 0..9 {
                for cell in 0..9 {
                    let m = Move::new(board, cell);
                    let played = state.transition(m, state.to_move());
                    assert_eq!(legal.contains(&m), played.is_ok(), "{m} in {state:?}");
                    // the wrong player can never move
                    assert!(state.transition(m, !state.to_move()).is_err());
                }
            }
        });
    }
}

#[test]
fn model_moves_agree_with_transition_for_both_movers() {
    let model = Ultimate;
    for seed in SEEDS {
        random_game(seed, |state, _, _| {
            for mover in [Player::X, Player::O] {
                let legal = model.legal_moves(state, mover);
                if mover != state.to_move() {
                    assert!(legal.is_empty());
                }
                for board in 0..9 {
                    for cell in 0..9 {
                        let m = Move::new(board, cell);
                        let played = model.transition(state, m, mover);
                        assert_eq!(legal.contains(&m), played.is_ok(), "{mover} {m} in {state:?}");
                    }
                }
            }
        });
    }
}

#[test]
fn connect_four_moves_agree_with_transition_for_both_movers() {
    let model = ConnectFour;
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = model.initialize();
        loop {
            for mover in [Player::X, Player::O] {
                let legal = model.legal_moves(&grid, mover);
                for column in 0..COLUMNS {
                    let played = model.transition(&grid, Column(column), mover);
                    assert_eq!(legal.contains(&Column(column)), played.is_ok());
                }
            }
            let mover = model.to_move(&grid);
            match model.legal_moves(&grid, mover).choose(&mut rng) {
                Some(&column) => grid = model.transition(&grid, column, mover).unwrap(),
                None => break,
            }
        }
        assert!(model.terminal(&grid));
    }
}

#[test]
fn cell_selects_the_next_board() {
    for seed in SEEDS {
        random_game(seed, |_, next, m| {
            if next.terminal() {
                return;
            }
            let target = next.board(m.cell).unwrap();
            if target.is_closed() {
                assert_eq!(next.active_board(), None);
            } else {
                assert_eq!(next.active_board(), Some(m.cell));
                assert!(next.legal_moves().iter().all(|n| n.board == m.cell));
            }
        });
    }
}

#[test]
fn connect_four_random_games() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::default();
        while let Some(&column) = grid.legal_moves().choose(&mut rng) {
            assert_eq!(ConnectFour.utility(&grid), Err(GameError::NotTerminal));
            grid.play(column).unwrap();
        }
        assert!(ConnectFour.terminal(&grid));
        assert!(ConnectFour.utility(&grid).is_ok());
    }
}
