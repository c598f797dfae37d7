use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::action::{Action, Actions};
use crate::state::State;

/// An action's preconditions don't hold in the given state.
///
/// Inside the search this just means "not a valid transition here" and is
/// absorbed. It only reaches callers through [`execute`]/[`replay`] when they
/// drive the executor directly with an illegal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreconditionUnmet;

impl Display for PreconditionUnmet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Action precondition unmet in this state")
    }
}

impl Error for PreconditionUnmet {}

/// Applies one action to a state, producing the successor state.
///
/// Either the whole action applies or none of it does - on failure the input
/// state is untouched and no partial result exists. For pushes the crate is
/// relocated before the agent; both target cells are computed from the agent
/// position as it was before the action ran.
pub fn execute(state: &State, action: Action) -> Result<State, PreconditionUnmet> {
    let step = state.agent() + action.dir;
    let step_two = step + action.dir;

    if action.is_push {
        if !state.is_crate(step) || state.is_wall(step_two) || state.is_crate(step_two) {
            return Err(PreconditionUnmet);
        }
        Ok(state.move_crate(step, step_two).move_agent(step))
    } else {
        if state.is_wall(step) || state.is_crate(step) {
            return Err(PreconditionUnmet);
        }
        Ok(state.move_agent(step))
    }
}

/// Replays an action sequence from `initial`, returning the full state
/// history (initial state included) for display or verification.
pub fn replay(initial: &State, actions: &Actions) -> Result<Vec<State>, PreconditionUnmet> {
    let mut history = vec![initial.clone()];
    for &action in actions {
        let next = execute(history.last().unwrap(), action)?;
        history.push(next);
    }
    Ok(history)
}

#[cfg(test)]
mod tests {
    use crate::data::{Dir, Pos};

    use super::*;

    fn state(text: &str) -> State {
        text.parse().unwrap()
    }

    #[test]
    fn walk_into_floor() {
        let s = state(
            "%%%%\n\
             %p %\n\
             %%%%\n",
        );
        let next = execute(&s, Action::walk(Dir::Right)).unwrap();
        assert_eq!(next.agent(), Pos::new(2, 1));
        // the input state is untouched
        assert_eq!(s.agent(), Pos::new(1, 1));
    }

    #[test]
    fn walk_into_wall_or_crate_fails() {
        let s = state(
            "%%%%\n\
             %pc%\n\
             %%%%\n",
        );
        assert_eq!(
            execute(&s, Action::walk(Dir::Left)),
            Err(PreconditionUnmet)
        );
        assert_eq!(
            execute(&s, Action::walk(Dir::Right)),
            Err(PreconditionUnmet)
        );
        assert_eq!(execute(&s, Action::walk(Dir::Up)), Err(PreconditionUnmet));
    }

    #[test]
    fn push_moves_crate_then_agent() {
        let s = state(
            "%%%%%\n\
             %pcb%\n\
             %%%%%\n",
        );
        let next = execute(&s, Action::push(Dir::Right)).unwrap();
        assert_eq!(next.agent(), Pos::new(2, 1));
        assert!(next.is_crate(Pos::new(3, 1)));
        assert!(!next.is_crate(Pos::new(2, 1)));
        assert!(next.is_win());
    }

    #[test]
    fn push_requires_a_crate() {
        let s = state(
            "%%%%%\n\
             %p b%\n\
             %%%%%\n",
        );
        assert_eq!(
            execute(&s, Action::push(Dir::Right)),
            Err(PreconditionUnmet)
        );
    }

    #[test]
    fn push_blocked_by_wall_or_crate() {
        let against_wall = state(
            "%%%%\n\
             %pc%\n\
             %%%%\n",
        );
        assert_eq!(
            execute(&against_wall, Action::push(Dir::Right)),
            Err(PreconditionUnmet)
        );

        let against_crate = state(
            "%%%%%%\n\
             %pcc %\n\
             %%%%%%\n",
        );
        assert_eq!(
            execute(&against_crate, Action::push(Dir::Right)),
            Err(PreconditionUnmet)
        );
    }

    #[test]
    fn replay_builds_history() {
        let s = state(
            "%%%%%%\n\
             %p cb%\n\
             %%%%%%\n",
        );
        let actions = Actions::new(vec![Action::walk(Dir::Right), Action::push(Dir::Right)]);
        let history = replay(&s, &actions).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], s);
        assert!(history[2].is_win());
    }

    #[test]
    fn replay_stops_on_illegal_action() {
        let s = state(
            "%%%%\n\
             %p %\n\
             %%%%\n",
        );
        let actions = Actions::new(vec![Action::walk(Dir::Up)]);
        assert_eq!(replay(&s, &actions), Err(PreconditionUnmet));
    }
}
