use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// One of the eight capabilities of the agent - a walk or a push in one of
/// the four directions. Plain data, no closure table: the executor derives
/// preconditions and postconditions from the two tags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub dir: Dir,
    pub is_push: bool,
}

/// The full catalog in its fixed enumeration order. The search expands
/// states in exactly this order, which is what makes results reproducible.
pub const ACTIONS: [Action; 8] = [
    Action::walk(Dir::Left),
    Action::walk(Dir::Right),
    Action::walk(Dir::Up),
    Action::walk(Dir::Down),
    Action::push(Dir::Left),
    Action::push(Dir::Right),
    Action::push(Dir::Up),
    Action::push(Dir::Down),
];

impl Action {
    pub const fn walk(dir: Dir) -> Self {
        Action {
            dir,
            is_push: false,
        }
    }

    pub const fn push(dir: Dir) -> Self {
        Action { dir, is_push: true }
    }

    /// Caller-facing identifier, e.g. `move_left` or `push_down`.
    pub fn name(self) -> String {
        if self.is_push {
            format!("push_{}", self.dir.name())
        } else {
            format!("move_{}", self.dir.name())
        }
    }
}

impl Display for Action {
    /// Compact notation: direction letter, uppercased for pushes.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())
        } else {
            write!(f, "{}", self.dir)
        }
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An action sequence, usually a solution.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Actions(Vec<Action>);

impl Actions {
    pub fn new(actions: Vec<Action>) -> Self {
        Actions(actions)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|a| a.is_push).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    pub(crate) fn add(&mut self, action: Action) {
        self.0.push(action);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }
}

impl IntoIterator for Actions {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in self {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl Debug for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
