//! Ground-truth maze layouts and their text format.

use std::error::Error;
use std::fmt;

use crate::heading::to_absolute;
use crate::render::{LINE_COUNT, LINE_WIDTH, render_walls};
use crate::types::{Cell, Direction, MAZE_SIZE, Relative, Sensors};
use crate::walls::WallMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    LineCount { found: usize },
    LineWidth { line: usize, width: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::LineCount { found } => {
                write!(f, "expected {LINE_COUNT} lines, found {found}")
            }
            LayoutError::LineWidth { line, width } => {
                write!(f, "line {line} is {width} characters wide, limit is {LINE_WIDTH}")
            }
        }
    }
}

impl Error for LayoutError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    walls: WallMap,
}

impl MazeLayout {
    /// No internal walls.
    pub fn open() -> Self {
        Self { walls: WallMap::new() }
    }

    pub fn from_walls(walls: WallMap) -> Self {
        Self { walls }
    }

    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    pub fn walls_mut(&mut self) -> &mut WallMap {
        &mut self.walls
    }

    /// What the mouse's three sensors report on `cell` facing `heading`.
    pub fn sensors(&self, cell: Cell, heading: Direction) -> Sensors {
        let blocked = |relative| self.walls.has_wall(cell, to_absolute(heading, relative));
        Sensors {
            front: blocked(Relative::Front),
            left: blocked(Relative::Left),
            right: blocked(Relative::Right),
        }
    }

    /// Parses the post-and-wall format produced by [`MazeLayout::render`].
    ///
    /// Any `-` between two posts is a horizontal wall and a `|` on a post column is a
    /// vertical wall. Trailing whitespace may be trimmed; the outer boundary is implied.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        if lines.len() != LINE_COUNT {
            return Err(LayoutError::LineCount { found: lines.len() });
        }
        if let Some((line, width)) = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.chars().count()))
            .find(|&(_, width)| width > LINE_WIDTH)
        {
            return Err(LayoutError::LineWidth { line, width });
        }

        let mut walls = WallMap::new();
        for (k, pair) in lines.chunks(2).take(MAZE_SIZE).enumerate() {
            let y = (MAZE_SIZE - 1 - k) as u8;
            let posts: Vec<char> = pair[0].chars().collect();
            let sides: Vec<char> = pair[1].chars().collect();
            for x in 0..MAZE_SIZE as u8 {
                let cell = Cell { x, y };
                let span = 4 * usize::from(x);
                if posts.iter().skip(span + 1).take(3).any(|&c| c == '-') {
                    walls.record_wall(cell, Direction::North);
                }
                if sides.get(span) == Some(&'|') {
                    walls.record_wall(cell, Direction::West);
                }
            }
        }
        Ok(Self { walls })
    }

    pub fn render(&self) -> String {
        render_walls(&self.walls, |_| String::new())
    }
}
