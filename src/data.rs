use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Cell coordinate - `x` is the column, `y` is the row.
///
/// There is no bounds checking anywhere. A coordinate outside the board
/// (including negative ones) is simply not a member of any cell set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn left(self) -> Pos {
        Pos::new(self.x - 1, self.y)
    }

    pub fn right(self) -> Pos {
        Pos::new(self.x + 1, self.y)
    }

    pub fn up(self) -> Pos {
        Pos::new(self.x, self.y - 1)
    }

    pub fn down(self) -> Pos {
        Pos::new(self.x, self.y + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl Dir {
    pub fn name(self) -> &'static str {
        match self {
            Dir::Left => "left",
            Dir::Right => "right",
            Dir::Up => "up",
            Dir::Down => "down",
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        match dir {
            Dir::Left => self.left(),
            Dir::Right => self.right(),
            Dir::Up => self.up(),
            Dir::Down => self.down(),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Left => 'l',
            Dir::Right => 'r',
            Dir::Up => 'u',
            Dir::Down => 'd',
        };
        write!(f, "{}", c)
    }
}
