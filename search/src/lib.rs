//! Game-agnostic adversarial search.
//!
//! Everything here is generic over [`ultimate::Heuristic`], so the same
//! negamax drives both ultimate tic-tac-toe and connect four.

pub mod agent;
pub mod config;
mod search;
mod tt;

pub use agent::{Agent, NegamaxAgent, RandomAgent};
pub use config::{SearchConfig, SearchLimit};
pub use search::{Search, SearchStats};
pub use tt::{Bound, Entry, TranspositionTable};
