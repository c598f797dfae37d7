use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::debug;

use crate::action::{Action, Actions, ACTIONS};
use crate::executor::execute;
use crate::state::State;

/// The frontier exhausted (or the depth bound was reached) without finding
/// a winning state. This is a definitive answer, not a transient condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSolution;

impl Display for NoSolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No solution found")
    }
}

impl Error for NoSolution {}

pub struct Solution {
    pub actions: Actions,
    pub stats: Stats,
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} actions", self.actions, self.actions.move_cnt())?;
        write!(f, "{:?}", self.stats)
    }
}

/// Search counters per depth. Mostly for tests and curiosity - the numbers
/// also make regressions in deduplication visible.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum()
    }

    fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    fn add_unique_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<i32>, depth: usize) -> bool {
        let mut new_depth = false;
        while depth >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[depth] += 1;
        new_depth
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use separator::Separatable;

        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )?;
        write!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use separator::Separatable;

        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique states visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "{:<7}{:<15}{:<15}{:<15}", "Depth", "Created", "Visited", "Duplicates")?;
        for depth in 0..self.created_states.len() {
            let get = |counts: &Vec<i32>| counts.get(depth).copied().unwrap_or(0);
            writeln!(
                f,
                "{:<7}{:<15}{:<15}{:<15}",
                format!("{}:", depth),
                get(&self.created_states).separated_string(),
                get(&self.visited_states).separated_string(),
                get(&self.duplicate_states).separated_string(),
            )?;
        }
        Ok(())
    }
}

/// Breadth-first search over the transition graph.
///
/// The frontier is FIFO, so the first win found is a minimum-length solution
/// measured in actions. The predecessor map doubles as the visited set:
/// a state being a key means it was already discovered.
///
/// With `max_depth = Some(n)` the search stops as soon as the frontier head
/// reaches depth `n` - states at depth `n` are discovered but never expanded
/// or win-checked, so a bound of `n` finds solutions of at most `n - 1`
/// actions. `None` searches to exhaustion.
pub fn solve_bfs(initial: &State, max_depth: Option<usize>) -> Result<Solution, NoSolution> {
    let mut stats = Stats::new();

    let mut queue = VecDeque::new();
    let mut precedents: FnvHashMap<State, Option<(Action, State)>> = FnvHashMap::default();

    stats.add_created(0);
    queue.push_back((initial.clone(), 0));
    precedents.insert(initial.clone(), None);

    while let Some((current, depth)) = queue.pop_front() {
        if let Some(bound) = max_depth {
            if depth >= bound {
                break;
            }
        }

        if stats.add_unique_visited(depth) {
            debug!("visited new depth: {}", depth);
        }

        if current.is_win() {
            debug!("solved at depth {}, backtracking path", depth);
            let actions = build_path(&precedents, &current);
            return Ok(Solution { actions, stats });
        }

        for &action in &ACTIONS {
            let next = match execute(&current, action) {
                Ok(next) => next,
                // not a valid transition here, move on
                Err(_) => continue,
            };
            if precedents.contains_key(&next) {
                stats.add_reached_duplicate(depth + 1);
                continue;
            }
            stats.add_created(depth + 1);
            precedents.insert(next.clone(), Some((action, current.clone())));
            queue.push_back((next, depth + 1));
        }
    }

    debug!("exhausted: {:?}", stats);
    Err(NoSolution)
}

/// Re-runs the bounded BFS with depth limits 1, 2, ... `max_depth`.
///
/// Trades repeated work for a hard ceiling on frontier memory. Each retry
/// restarts from scratch rather than resuming the previous frontier - known
/// to be quadratic in the worst case, kept simple on purpose.
pub fn solve_iterative_deepening(
    initial: &State,
    max_depth: usize,
) -> Result<Solution, NoSolution> {
    debug!("start of iterative deepening, overall bound {}", max_depth);
    for depth in 1..=max_depth {
        debug!("depth bound: {}", depth);
        if let Ok(solution) = solve_bfs(initial, Some(depth)) {
            return Ok(solution);
        }
    }
    Err(NoSolution)
}

/// Walks the predecessor map backward from the winning state to the root,
/// then reverses into execution order.
///
/// Panics if `final_state` was never discovered - that's a programming
/// error, not a reachable user-facing condition.
fn build_path(precedents: &FnvHashMap<State, Option<(Action, State)>>, final_state: &State) -> Actions {
    let mut actions = Actions::default();
    let mut state = final_state;
    while let Some((action, prev)) = &precedents[state] {
        actions.add(*action);
        state = prev;
    }
    actions.reverse();
    actions
}
