use std::time::{Duration, Instant};

use log::{debug, trace};
use ultimate::{GameError, Heuristic, IllegalMove, Player};

use crate::{
    config::{SearchConfig, SearchLimit, DEADLINE_CHECK_INTERVAL, MAX_DEPTH},
    tt::{Bound, Entry, TranspositionTable},
};

/// Summary of the last completed iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Value of the chosen move for the player to move.
    pub score: f64,
}

/// Why a search stopped before finishing an iteration.
enum Interrupt {
    Timeout,
    Rules(GameError),
}

impl From<GameError> for Interrupt {
    fn from(error: GameError) -> Self {
        Interrupt::Rules(error)
    }
}

/// Negamax with alpha-beta pruning and iterative deepening.
///
/// Scores are always from the point of view of the player to move at the
/// node. Won terminal positions score `win_score - ply`, so quicker wins and
/// slower losses are preferred.
pub struct Search<'a, G: Heuristic> {
    model: &'a G,
    config: SearchConfig,
    table: TranspositionTable<G::State>,
    nodes: u64,
    deadline: Option<Instant>,
    completed: u8,
}

impl<'a, G: Heuristic> Search<'a, G> {
    pub fn new(model: &'a G, config: SearchConfig) -> Self {
        Self {
            model,
            config,
            table: TranspositionTable::default(),
            nodes: 0,
            deadline: None,
            completed: 0,
        }
    }

    /// Best move for the player to move, or `None` if the game is over.
    ///
    /// Under a time limit the first iteration always runs to completion,
    /// later iterations are abandoned once the deadline passes.
    pub fn best_move(
        &mut self,
        state: &G::State,
    ) -> Result<Option<(G::Move, SearchStats)>, GameError> {
        let start = Instant::now();
        self.nodes = 0;
        self.completed = 0;
        self.table.clear();

        let mover = self.model.to_move(state);
        if self.model.legal_moves(state, mover).is_empty() {
            return Ok(None);
        }

        let (max_depth, deadline) = match self.config.limit {
            SearchLimit::Depth(depth) => (depth.max(1), None),
            SearchLimit::Time(budget) => (MAX_DEPTH, Some(start + budget)),
        };
        self.deadline = deadline;

        let mut best = None;
        let mut principal = None;
        for depth in 1..=max_depth {
            match self.root(state, depth, principal) {
                Ok((m, score)) => {
                    self.completed = depth;
                    principal = Some(m);
                    let stats = SearchStats {
                        depth,
                        nodes: self.nodes,
                        elapsed: start.elapsed(),
                        score,
                    };
                    debug!(
                        "depth {depth}: {m:?} scores {score:.2} ({} nodes, {:?})",
                        stats.nodes, stats.elapsed
                    );
                    best = Some((m, stats));
                    if self.config.is_decisive(score) {
                        break;
                    }
                }
                Err(Interrupt::Timeout) => {
                    trace!("depth {depth} abandoned after {} nodes", self.nodes);
                    break;
                }
                Err(Interrupt::Rules(error)) => return Err(error),
            }
            if self.out_of_time() {
                break;
            }
        }
        Ok(best)
    }

    /// Searches every root move with a full window on the right.
    /// The previous iteration's best move goes first.
    fn root(
        &mut self,
        state: &G::State,
        depth: u8,
        principal: Option<G::Move>,
    ) -> Result<(G::Move, f64), Interrupt> {
        self.nodes += 1;
        let mover = self.model.to_move(state);
        let mut moves = self.model.legal_moves(state, mover);
        self.config.ordering.order(&mut moves, mover);
        if let Some(index) = principal.and_then(|p| moves.iter().position(|&m| m == p)) {
            moves[..=index].rotate_right(1);
        }

        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<(G::Move, f64)> = None;
        for m in moves {
            if self.out_of_time() {
                return Err(Interrupt::Timeout);
            }
            let child = self.model.transition(state, m, mover)?;
            let score = -self.negamax(&child, depth - 1, f64::NEG_INFINITY, -alpha, 1)?;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((m, score));
                alpha = score;
            }
        }
        best.ok_or(Interrupt::Rules(IllegalMove::GameOver.into()))
    }

    fn negamax(
        &mut self,
        state: &G::State,
        depth: u8,
        mut alpha: f64,
        beta: f64,
        ply: u32,
    ) -> Result<f64, Interrupt> {
        self.nodes += 1;
        if self.nodes % DEADLINE_CHECK_INTERVAL == 0 && self.out_of_time() {
            return Err(Interrupt::Timeout);
        }

        let mover = self.model.to_move(state);
        if self.model.terminal(state) {
            let utility = self.model.utility(state)?;
            return Ok(self.terminal_score(utility, mover, ply));
        }
        if depth == 0 {
            return Ok(self.model.evaluate(state, mover));
        }

        let key = self
            .config
            .transposition
            .then(|| self.model.freeze(state));
        if let Some(entry) = key.as_ref().and_then(|key| self.table.probe(key, depth)) {
            if let Some(score) = entry.cutoff(alpha, beta) {
                return Ok(score);
            }
        }

        let original_alpha = alpha;
        let mut moves = self.model.legal_moves(state, mover);
        self.config.ordering.order(&mut moves, mover);

        let mut best = f64::NEG_INFINITY;
        for m in moves {
            let child = self.model.transition(state, m, mover)?;
            let score = -self.negamax(&child, depth - 1, -beta, -alpha, ply + 1)?;
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        if let Some(key) = key {
            let bound = if best <= original_alpha {
                Bound::Upper
            } else if best >= beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.table.store(key, Entry {
                depth,
                score: best,
                bound,
            });
        }
        Ok(best)
    }

    /// `utility` is from the first player's point of view.
    fn terminal_score(&self, utility: i32, mover: Player, ply: u32) -> f64 {
        f64::from(utility * mover.sign()) * (self.config.win_score - f64::from(ply))
    }

    /// Never true before the first iteration has completed.
    fn out_of_time(&self) -> bool {
        self.completed > 0
            && self
                .deadline
                .map_or(false, |deadline| Instant::now() >= deadline)
    }
}
