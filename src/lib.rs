// Additional warnings that are allow by default (`rustc -W help`)
#![warn(rust_2018_idioms)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]

pub mod action;
pub mod data;
pub mod executor;
pub mod parser;
pub mod solver;
pub mod state;

use crate::solver::{NoSolution, Solution};
use crate::state::State;

pub trait Solve {
    /// Solves the puzzle starting from this state.
    ///
    /// Without a bound this is plain BFS to exhaustion. With one it runs
    /// iterative deepening up to `max_depth`, capping frontier memory at the
    /// cost of re-exploring shallow depths.
    fn solve(&self, max_depth: Option<usize>) -> Result<Solution, NoSolution>;
}

impl Solve for State {
    fn solve(&self, max_depth: Option<usize>) -> Result<Solution, NoSolution> {
        match max_depth {
            None => solver::solve_bfs(self, None),
            Some(depth) => solver::solve_iterative_deepening(self, depth),
        }
    }
}
