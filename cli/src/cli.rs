use std::{fmt::Display, str::FromStr, time::Duration};

use clap::Parser;
use search::config::{DEFAULT_DEPTH, DEFAULT_THINK_TIME};
use ultimate::{Heuristic, MoveOrdering};

/// Play ultimate tic-tac-toe or connect four in the terminal
#[derive(Parser)]
pub struct Args {
    /// Game to play: ultimate or connect-four
    #[clap(short, long, default_value_t = Game::Ultimate)]
    pub game: Game,
    /// Who plays X: manual, random, depth[:plies] or time[:seconds]
    #[clap(short = 'x', long, default_value = "manual")]
    pub first: PlayerSpec,
    /// Who plays O: manual, random, depth[:plies] or time[:seconds]
    #[clap(short = 'o', long, default_value = "depth")]
    pub second: PlayerSpec,
    /// Move ordering used by the search: center, preference or none
    #[clap(long, default_value_t = Ordering::Center)]
    pub ordering: Ordering,
    /// Disable the transposition table
    #[clap(long)]
    pub no_tt: bool,
    /// Seed for random players
    #[clap(short, long)]
    pub seed: Option<u64>,
    /// Log every completed search depth
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
    Ultimate,
    ConnectFour,
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Game::Ultimate => "ultimate",
            Game::ConnectFour => "connect-four",
        })
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ultimate" | "uttt" => Ok(Game::Ultimate),
            "connect-four" | "connect4" | "c4" => Ok(Game::ConnectFour),
            _ => Err(format!("unknown game {s:?}")),
        }
    }
}

/// How one side chooses its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSpec {
    Manual,
    Random,
    Depth(u8),
    Time(Duration),
}

impl FromStr for PlayerSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = match s.split_once(':') {
            Some((kind, value)) => (kind, Some(value)),
            None => (s, None),
        };
        match (kind.to_lowercase().as_str(), value) {
            ("manual" | "human", None) => Ok(PlayerSpec::Manual),
            ("random", None) => Ok(PlayerSpec::Random),
            ("depth", None) => Ok(PlayerSpec::Depth(DEFAULT_DEPTH)),
            ("depth", Some(plies)) => match plies.parse::<u8>() {
                Ok(plies) if plies > 0 => Ok(PlayerSpec::Depth(plies)),
                _ => Err(format!("depth must be a positive number of plies, got {plies:?}")),
            },
            ("time", None) => Ok(PlayerSpec::Time(DEFAULT_THINK_TIME)),
            ("time", Some(seconds)) => match seconds.parse::<f64>() {
                Ok(seconds) if seconds.is_finite() && seconds > 0.0 => {
                    Ok(PlayerSpec::Time(Duration::from_secs_f64(seconds)))
                }
                _ => Err(format!("time must be a positive number of seconds, got {seconds:?}")),
            },
            _ => Err(format!("unknown player {s:?}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordering {
    Center,
    Preference,
    None,
}

impl Ordering {
    pub fn strategy<G: Heuristic>(self, model: &G) -> MoveOrdering {
        match self {
            Ordering::Center => MoveOrdering::CenterDistance,
            Ordering::Preference => MoveOrdering::Preference(model.preference_table()),
            Ordering::None => MoveOrdering::Enumeration,
        }
    }
}

impl Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Ordering::Center => "center",
            Ordering::Preference => "preference",
            Ordering::None => "none",
        })
    }
}

impl FromStr for Ordering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "center" | "centre" => Ok(Ordering::Center),
            "preference" => Ok(Ordering::Preference),
            "none" => Ok(Ordering::None),
            _ => Err(format!("unknown ordering {s:?}")),
        }
    }
}
