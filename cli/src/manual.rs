use std::{
    fmt::Display,
    io::{self, Write},
    str::FromStr,
};

use search::Agent;
use ultimate::Player;

use crate::render::Render;

/// A human typing moves, one per line.
pub struct ManualAgent {
    next_line: Box<dyn FnMut() -> Option<String>>,
}

impl ManualAgent {
    pub fn new(next_line: impl FnMut() -> Option<String> + 'static) -> Self {
        Self {
            next_line: Box::new(next_line),
        }
    }

    pub fn stdin() -> Self {
        Self::new(|| {
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line),
            }
        })
    }
}

impl<G> Agent<G> for ManualAgent
where
    G: Render,
    G::Move: FromStr + Display,
    <G::Move as FromStr>::Err: Display,
{
    /// Asks again until the input is a legal move. Gives up at end of input.
    fn choose_move(&mut self, model: &G, state: &G::State, mover: Player) -> Option<G::Move> {
        let legal = model.legal_moves(state, mover);
        if legal.is_empty() {
            return None;
        }
        loop {
            print!("{mover} ({}): ", model.move_hint(state));
            let _ = io::stdout().flush();
            let line = (self.next_line)()?;
            match line.trim().parse::<G::Move>() {
                Ok(m) if legal.contains(&m) => return Some(m),
                Ok(m) => match model.transition(state, m, mover) {
                    Err(e) => println!("cannot play {m}: {e}"),
                    Ok(_) => println!("cannot play {m}"),
                },
                Err(e) => println!("{e}"),
            }
        }
    }

    fn name(&self) -> String {
        "manual".to_string()
    }
}
