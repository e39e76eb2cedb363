use std::{fmt::Display, str::FromStr};

use clap::Parser;
use cli::{Args, Game, PlayerSpec};
use log::{error, LevelFilter};
use manual::ManualAgent;
use mimalloc::MiMalloc;
use render::Render;
use search::{Agent, NegamaxAgent, RandomAgent, SearchConfig};
use ultimate::{ConnectFour, Heuristic, Player, Ultimate};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod manual;
mod render;

fn main() {
    let args = Args::parse();
    simple_logging::log_to_stderr(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let seed = args.seed.unwrap_or_else(rand::random);
    match args.game {
        Game::Ultimate => play_match(&Ultimate, &args, seed),
        Game::ConnectFour => play_match(&ConnectFour, &args, seed),
    }
}

fn make_agent<G>(model: &G, spec: PlayerSpec, args: &Args, seed: u64) -> Box<dyn Agent<G>>
where
    G: Render + Heuristic,
    G::Move: FromStr + Display,
    <G::Move as FromStr>::Err: Display,
{
    let tuned = |config: SearchConfig| {
        config
            .with_ordering(args.ordering.strategy(model))
            .with_transposition(!args.no_tt)
    };
    match spec {
        PlayerSpec::Manual => Box::new(ManualAgent::stdin()),
        PlayerSpec::Random => Box::new(RandomAgent::seeded(seed)),
        PlayerSpec::Depth(depth) => Box::new(NegamaxAgent::new(tuned(SearchConfig::depth(depth)))),
        PlayerSpec::Time(budget) => Box::new(NegamaxAgent::new(tuned(SearchConfig::time(budget)))),
    }
}

fn play_match<G>(model: &G, args: &Args, seed: u64)
where
    G: Render + Heuristic,
    G::Move: FromStr + Display,
    <G::Move as FromStr>::Err: Display,
{
    let mut agents = [
        make_agent(model, args.first, args, seed),
        make_agent(model, args.second, args, seed.wrapping_add(1)),
    ];
    println!(
        "{}: X is {}, O is {}",
        args.game,
        agents[0].name(),
        agents[1].name()
    );

    let mut state = model.initialize();
    while !model.terminal(&state) {
        println!("\n{}", model.render(&state));
        let mover = model.to_move(&state);
        let agent = &mut agents[mover.index()];
        let m = match agent.choose_move(model, &state, mover) {
            Some(m) => m,
            None => {
                println!("{mover} ({}) gave up", agent.name());
                return;
            }
        };
        match model.transition(&state, m, mover) {
            Ok(next) => state = model.freeze(&next),
            Err(e) => {
                error!("{} chose {m}: {e}", agent.name());
                return;
            }
        }
        println!("{mover} plays {m}");
    }

    println!("\n{}", model.render(&state));
    match model.utility(&state) {
        Ok(1) => println!("{} wins", Player::X),
        Ok(-1) => println!("{} wins", Player::O),
        Ok(_) => println!("draw"),
        Err(e) => error!("{e}"),
    }
}
