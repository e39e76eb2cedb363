use std::fmt::Write;

use ultimate::{Cell, ConnectFour, GameModel, Grid, MetaState, Player, Ultimate, COLUMNS, ROWS};

/// Text form of a game position.
pub trait Render: GameModel {
    fn render(&self, state: &Self::State) -> String;

    /// What a move looks like at the prompt.
    fn move_hint(&self, state: &Self::State) -> String;
}

fn mark(cell: Cell) -> char {
    match cell {
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
        None => '.',
    }
}

impl Render for Ultimate {
    fn render(&self, state: &MetaState) -> String {
        let mut out = String::new();
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                out.push_str("------+-------+------\n");
            }
            let mut line = String::new();
            for column in 0..9 {
                if column > 0 && column % 3 == 0 {
                    line.push_str("| ");
                }
                let board = &state.boards()[row / 3 * 3 + column / 3];
                line.push(mark(board.get(row % 3 * 3 + column % 3)));
                line.push(' ');
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        let winners: String = state.meta_outcomes().into_iter().map(mark).collect();
        let _ = writeln!(out, "boards won: {winners}");
        match state.active_board() {
            Some(board) => {
                let _ = write!(out, "{} to move on board {board}", state.to_move());
            }
            None => {
                let _ = write!(out, "{} to move on any open board", state.to_move());
            }
        }
        out
    }

    fn move_hint(&self, state: &MetaState) -> String {
        match state.active_board() {
            Some(board) => format!("{board},cell"),
            None => "board,cell".to_string(),
        }
    }
}

impl Render for ConnectFour {
    fn render(&self, state: &Grid) -> String {
        let mut out = String::new();
        for row in 0..ROWS {
            let line: Vec<String> = (0..COLUMNS)
                .map(|column| mark(state.get(row, column)).to_string())
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        let footer: Vec<String> = (0..COLUMNS).map(|column| column.to_string()).collect();
        out.push_str(&footer.join(" "));
        let _ = write!(out, "\n{} to move", state.to_move());
        out
    }

    fn move_hint(&self, _state: &Grid) -> String {
        format!("column 0-{}", COLUMNS - 1)
    }
}
