use log::{error, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use ultimate::{GameModel, Heuristic, Player};

use crate::{
    config::SearchConfig,
    search::{Search, SearchStats},
};

/// Something that picks moves: a human at a prompt, a search, a die.
pub trait Agent<G: GameModel> {
    /// `None` when there is nothing to play or the agent gives up.
    fn choose_move(&mut self, model: &G, state: &G::State, mover: Player) -> Option<G::Move>;

    fn name(&self) -> String;
}

/// Plays the move a [`Search`] likes best.
#[derive(Clone, Debug, Default)]
pub struct NegamaxAgent {
    config: SearchConfig,
    last: Option<SearchStats>,
}

impl NegamaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, last: None }
    }

    /// Statistics of the most recent decision.
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last
    }
}

impl<G: Heuristic> Agent<G> for NegamaxAgent {
    fn choose_move(&mut self, model: &G, state: &G::State, mover: Player) -> Option<G::Move> {
        if model.to_move(state) != mover {
            return None;
        }
        let mut search = Search::new(model, self.config.clone());
        match search.best_move(state) {
            Ok(Some((m, stats))) => {
                info!(
                    "{mover} plays {m:?} at depth {} scoring {:.2} ({} nodes in {:?})",
                    stats.depth, stats.score, stats.nodes, stats.elapsed
                );
                self.last = Some(stats);
                Some(m)
            }
            Ok(None) => None,
            Err(e) => {
                error!("search failed: {e}");
                None
            }
        }
    }

    fn name(&self) -> String {
        format!("negamax ({:?})", self.config.limit)
    }
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent<R: Rng = StdRng> {
    rng: R,
}

impl RandomAgent {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: GameModel, R: Rng> Agent<G> for RandomAgent<R> {
    fn choose_move(&mut self, model: &G, state: &G::State, mover: Player) -> Option<G::Move> {
        model
            .legal_moves(state, mover)
            .choose(&mut self.rng)
            .copied()
    }

    fn name(&self) -> String {
        "random".to_string()
    }
}
