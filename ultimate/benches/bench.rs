use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ultimate::{perf_count, Grid, MetaState, Move, MoveOrdering, PreferenceTable, Player};

/// A middle game position with a forced board.
fn middle_game() -> MetaState {
    MetaState::from_moves(&[
        Move::new(8, 5),
        Move::new(5, 8),
        Move::new(8, 3),
        Move::new(3, 5),
        Move::new(5, 3),
        Move::new(3, 2),
        Move::new(2, 8),
        Move::new(8, 0),
        Move::new(0, 6),
        Move::new(6, 0),
        Move::new(0, 0),
        Move::new(0, 5),
    ])
    .unwrap()
}

fn perft(c: &mut Criterion) {
    c.bench_function("perft opening depth 3", |b| {
        let state = MetaState::initialize();
        b.iter(|| perf_count(state, black_box(3)))
    });
    c.bench_function("perft middle game depth 4", |b| {
        let state = middle_game();
        b.iter(|| perf_count(state, black_box(4)))
    });
}

fn move_gen(c: &mut Criterion) {
    c.bench_function("legal moves opening", |b| {
        let state = MetaState::initialize();
        b.iter(|| black_box(state).legal_moves())
    });
    c.bench_function("legal moves middle game", |b| {
        let state = middle_game();
        b.iter(|| black_box(state).legal_moves())
    });
    c.bench_function("possible moves middle game, reused buffer", |b| {
        let state = middle_game();
        let mut moves = Vec::with_capacity(81);
        b.iter(|| {
            moves.clear();
            black_box(state).possible_moves(&mut moves);
            moves.len()
        })
    });
    c.bench_function("legal moves connect four", |b| {
        let grid = Grid::from_moves(&[3, 3, 2, 4, 4, 2]).unwrap();
        b.iter(|| black_box(grid).legal_moves())
    });
}

fn making_moves(c: &mut Criterion) {
    c.bench_function("transition", |b| {
        let state = middle_game();
        let m = Move::new(5, 1);
        b.iter_batched(
            || state,
            |s| s.transition(black_box(m), Player::X).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

fn heuristics(c: &mut Criterion) {
    c.bench_function("evaluate middle game", |b| {
        let state = middle_game();
        b.iter(|| black_box(state).evaluate(Player::X))
    });
    c.bench_function("order by preference", |b| {
        let moves = MetaState::initialize().legal_moves();
        let ordering = MoveOrdering::Preference(PreferenceTable::ultimate());
        b.iter(|| ordering.ordered(black_box(moves.as_slice()), Player::X))
    });
}

fn canonical(c: &mut Criterion) {
    c.bench_function("freeze middle game", |b| {
        let state = middle_game();
        b.iter(|| black_box(state).freeze())
    });
    c.bench_function("canonical middle game", |b| {
        let state = middle_game();
        b.iter(|| black_box(state).canonical())
    });
}

criterion_group!(benches, perft, move_gen, making_moves, heuristics, canonical);
criterion_main!(benches);
