use std::time::Duration;

use ultimate::MoveOrdering;

// scores
/// Magnitude of a won terminal position, well above any static evaluation.
pub const WIN_SCORE: f64 = 1_000_000.0;

// limits
pub const DEFAULT_DEPTH: u8 = 4;
pub const DEFAULT_THINK_TIME: Duration = Duration::from_secs(2);
/// No game played here lasts longer than 81 plies.
pub const MAX_DEPTH: u8 = 81;
/// Nodes visited between two looks at the clock.
pub const DEADLINE_CHECK_INTERVAL: u64 = 1024;

// transposition table
pub const TABLE_CAPACITY: usize = 1 << 20;

/// When a search has to give an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLimit {
    /// Search exactly this many plies.
    Depth(u8),
    /// Deepen one ply at a time until the budget runs out.
    Time(Duration),
}

impl Default for SearchLimit {
    fn default() -> Self {
        SearchLimit::Depth(DEFAULT_DEPTH)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub limit: SearchLimit,
    pub ordering: MoveOrdering,
    pub transposition: bool,
    pub win_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: SearchLimit::default(),
            ordering: MoveOrdering::CenterDistance,
            transposition: true,
            win_score: WIN_SCORE,
        }
    }
}

impl SearchConfig {
    pub fn depth(depth: u8) -> Self {
        Self {
            limit: SearchLimit::Depth(depth),
            ..Default::default()
        }
    }

    pub fn time(budget: Duration) -> Self {
        Self {
            limit: SearchLimit::Time(budget),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    #[must_use]
    pub fn with_transposition(mut self, transposition: bool) -> Self {
        self.transposition = transposition;
        self
    }

    /// Scores at least this large can only come from a terminal position.
    pub fn is_decisive(&self, score: f64) -> bool {
        score.abs() >= self.win_score - f64::from(MAX_DEPTH)
    }
}
