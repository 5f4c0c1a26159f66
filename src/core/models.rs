use serde::{Deserialize, Serialize};

/// Static background of a cell. Set when the level loads and never written again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Wall,
    Empty,
    Target,
}

/// What currently stands on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Occupant {
    #[default]
    Empty,
    Block,
    Actor,
}

/// Grid coordinate, `i` is the row and `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    NewLevel,
    Resign,
}

/// One cell whose occupant was rewritten by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub pos: Vec2,
    pub before: Occupant,
    pub after: Occupant,
    pub direction: Direction,
}

/// Outcome of a single move request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub moved: bool,
    pub blocked: bool,
    pub cell_changes: Vec<CellChange>,
    pub solved: bool,
}

pub enum StepOutcome {
    Moved {
        actor: Vec2,
        changes: Vec<CellChange>,
    },
    Blocked,
}
