use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;

/// Immutable snapshot of the whole board.
///
/// A state is a pure value - equality and hashing are structural over all
/// four position fields, so two states reached through different action
/// sequences compare equal as long as their cell contents match. The search
/// relies on this for deduplication.
///
/// `walls` and `goals` never change across transitions, `crates` and `agent`
/// do. Transitions never mutate a state in place, they build a new one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    walls: Vec<Pos>,
    goals: Vec<Pos>,
    crates: Vec<Pos>,
    agent: Pos,
    width: i32,
    height: i32,
}

impl State {
    /// No validation - the text parser upholds the well-formedness contract,
    /// a caller constructing states directly is on their own.
    pub fn new(
        mut walls: Vec<Pos>,
        mut goals: Vec<Pos>,
        mut crates: Vec<Pos>,
        agent: Pos,
        (width, height): (i32, i32),
    ) -> State {
        // sort to detect equal states regardless of insertion order
        walls.sort();
        goals.sort();
        crates.sort();
        State {
            walls,
            goals,
            crates,
            agent,
            width,
            height,
        }
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn crates(&self) -> &[Pos] {
        &self.crates
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.binary_search(&pos).is_ok()
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.goals.binary_search(&pos).is_ok()
    }

    pub fn is_crate(&self, pos: Pos) -> bool {
        self.crates.binary_search(&pos).is_ok()
    }

    /// True iff every crate sits on a goal.
    pub fn is_win(&self) -> bool {
        self.crates.iter().all(|&c| self.is_goal(c))
    }

    /// New state with the crate at `from` relocated to `to`.
    pub(crate) fn move_crate(&self, from: Pos, to: Pos) -> State {
        let mut crates = self.crates.clone();
        if let Ok(i) = crates.binary_search(&from) {
            crates[i] = to;
            crates.sort();
        }
        State {
            crates,
            ..self.clone()
        }
    }

    /// New state with the agent relocated to `to`.
    pub(crate) fn move_agent(&self, to: Pos) -> State {
        State {
            agent: to,
            ..self.clone()
        }
    }
}

impl Display for State {
    /// Serializes back to the board text format, one line per row,
    /// trailing floor cells included so the round trip is exact.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos::new(x, y);
                let c = if pos == self.agent && self.is_goal(pos) {
                    'q'
                } else if self.is_crate(pos) && self.is_goal(pos) {
                    'v'
                } else if pos == self.agent {
                    'p'
                } else if self.is_crate(pos) {
                    'c'
                } else if self.is_goal(pos) {
                    'b'
                } else if self.is_wall(pos) {
                    '%'
                } else {
                    ' '
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
