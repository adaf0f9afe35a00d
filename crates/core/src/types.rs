use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Cells per side of the square maze.
pub const MAZE_SIZE: usize = 16;

/// Total number of cells; also the ceiling for any stored distance.
pub const CELL_COUNT: usize = MAZE_SIZE * MAZE_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const START: Cell = Cell { x: 0, y: 0 };

    /// The four goal cells surrounding the maze midpoint.
    pub const CENTER: [Cell; 4] = [
        Cell { x: (MAZE_SIZE / 2 - 1) as u8, y: (MAZE_SIZE / 2 - 1) as u8 },
        Cell { x: (MAZE_SIZE / 2) as u8, y: (MAZE_SIZE / 2 - 1) as u8 },
        Cell { x: (MAZE_SIZE / 2 - 1) as u8, y: (MAZE_SIZE / 2) as u8 },
        Cell { x: (MAZE_SIZE / 2) as u8, y: (MAZE_SIZE / 2) as u8 },
    ];

    pub fn new(x: u8, y: u8) -> Result<Self, AgentError> {
        if usize::from(x) >= MAZE_SIZE || usize::from(y) >= MAZE_SIZE {
            return Err(AgentError::OutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn is_start(self) -> bool {
        self == Self::START
    }

    pub fn is_center(self) -> bool {
        Self::CENTER.contains(&self)
    }

    /// Adjacent cell in `dir`, or `None` across the outer boundary.
    pub fn neighbor(self, dir: Direction) -> Option<Cell> {
        let (x, y) = match dir {
            Direction::North => (Some(self.x), self.y.checked_add(1)),
            Direction::East => (self.x.checked_add(1), Some(self.y)),
            Direction::South => (Some(self.x), self.y.checked_sub(1)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
        };
        let cell = Cell { x: x?, y: y? };
        cell.in_bounds().then_some(cell)
    }

    pub fn in_bounds(self) -> bool {
        usize::from(self.x) < MAZE_SIZE && usize::from(self.y) < MAZE_SIZE
    }

    /// Iterates every cell, column-major from the start corner.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..MAZE_SIZE as u8).flat_map(|x| (0..MAZE_SIZE as u8).map(move |y| Cell { x, y }))
    }
}

/// Absolute compass direction. Discriminants follow clockwise order so that
/// rotations are plain modular arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 4)]
    }

    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// Direction expressed against the mouse's heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Relative {
    Front = 0,
    Right = 1,
    Back = 2,
    Left = 3,
}

impl Relative {
    pub const ALL: [Relative; 4] =
        [Relative::Front, Relative::Right, Relative::Back, Relative::Left];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 4)]
    }
}

/// One wall-sensor reading, relative to the heading at the time of the reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sensors {
    pub front: bool,
    pub left: bool,
    pub right: bool,
}

impl Sensors {
    pub fn readings(self) -> [(Relative, bool); 3] {
        [(Relative::Front, self.front), (Relative::Left, self.left), (Relative::Right, self.right)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveForward,
    TurnClockwise,
    TurnCounterClockwise,
    TurnAround,
    Finish,
}

/// Which region the distance field currently measures toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Center,
    Start,
}

impl Target {
    pub fn cells(self) -> &'static [Cell] {
        match self {
            Target::Center => &Cell::CENTER,
            Target::Start => &[Cell::START],
        }
    }

    pub fn contains(self, cell: Cell) -> bool {
        match self {
            Target::Center => cell.is_center(),
            Target::Start => cell.is_start(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MissionPhase {
    Exploring,
    Returning,
    SpeedRun,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefloodReason {
    Retarget,
    Stuck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    MissionComplete,
    NoMove,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentEvent {
    TargetChanged { target: Target, run_count: u32 },
    Reflooded { reason: RefloodReason, seed: Cell, relaxations: u32 },
    Finished { reason: FinishReason, at: Cell },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    OutOfBounds { x: u8, y: u8 },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::OutOfBounds { x, y } => {
                write!(f, "cell ({x}, {y}) is outside the {MAZE_SIZE}x{MAZE_SIZE} maze")
            }
        }
    }
}

impl Error for AgentError {}
