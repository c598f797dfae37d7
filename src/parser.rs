use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErr {
    Empty,
    InvalidCell(usize, usize),
    RaggedRow(usize),
    NoAgent,
    MultipleAgents,
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErr::Empty => write!(f, "Empty board"),
            ParseErr::InvalidCell(x, y) => write!(f, "Invalid cell at [{}, {}]", x, y),
            ParseErr::RaggedRow(y) => write!(f, "Row {} differs in length from the first row", y),
            ParseErr::NoAgent => write!(f, "No agent"),
            ParseErr::MultipleAgents => write!(f, "More than one agent"),
        }
    }
}

impl Error for ParseErr {}

impl FromStr for State {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the board text format:
/// `%` wall, ` ` floor, `p` agent, `c` crate, `b` goal, `v` crate on goal,
/// `q` agent on goal. Empty lines are skipped, the first non-empty line
/// fixes the width.
pub fn parse(text: &str) -> Result<State, ParseErr> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
    if lines.is_empty() {
        return Err(ParseErr::Empty);
    }

    let width = lines[0].chars().count();
    let height = lines.len();

    let mut walls = Vec::new();
    let mut goals = Vec::new();
    let mut crates = Vec::new();
    let mut agent = None;

    for (y, line) in lines.iter().enumerate() {
        let mut row_len = 0;
        for (x, c) in line.chars().enumerate() {
            row_len += 1;
            let pos = Pos::new(x as i32, y as i32);
            match c {
                '%' => walls.push(pos),
                ' ' => {}
                'c' => crates.push(pos),
                'b' => goals.push(pos),
                'v' => {
                    crates.push(pos);
                    goals.push(pos);
                }
                'p' | 'q' => {
                    if agent.is_some() {
                        return Err(ParseErr::MultipleAgents);
                    }
                    agent = Some(pos);
                    if c == 'q' {
                        goals.push(pos);
                    }
                }
                _ => return Err(ParseErr::InvalidCell(x, y)),
            }
        }
        if row_len != width {
            return Err(ParseErr::RaggedRow(y));
        }
    }

    let agent = agent.ok_or(ParseErr::NoAgent)?;
    Ok(State::new(
        walls,
        goals,
        crates,
        agent,
        (width as i32, height as i32),
    ))
}
