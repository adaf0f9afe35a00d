//! Known-wall storage for the maze.
//! Each boundary between two cells is a single bit, so a wall seen from either side is the
//! same wall. The outer boundary is seeded at construction and is never cleared.

use crate::types::{Cell, Direction, MAZE_SIZE};

/// Bits for the boundary lines `0..=MAZE_SIZE` along one row or column.
type BoundaryLine = u32;

const OUTER_EDGES: BoundaryLine = 1 | (1 << MAZE_SIZE);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WallMap {
    /// Keyed by column. Bit `y` is the boundary on the south side of cell `(x, y)`.
    south_edges: [BoundaryLine; MAZE_SIZE],
    /// Keyed by row. Bit `x` is the boundary on the west side of cell `(x, y)`.
    west_edges: [BoundaryLine; MAZE_SIZE],
}

impl Default for WallMap {
    fn default() -> Self {
        Self::new()
    }
}

impl WallMap {
    /// A map that knows only the outer boundary.
    pub fn new() -> Self {
        Self { south_edges: [OUTER_EDGES; MAZE_SIZE], west_edges: [OUTER_EDGES; MAZE_SIZE] }
    }

    /// A map with every boundary walled.
    pub fn closed() -> Self {
        let all = (1 << (MAZE_SIZE + 1)) - 1;
        Self { south_edges: [all; MAZE_SIZE], west_edges: [all; MAZE_SIZE] }
    }

    pub fn has_wall(&self, cell: Cell, dir: Direction) -> bool {
        let (line, bit) = Self::locate(cell, dir);
        match dir {
            Direction::North | Direction::South => self.south_edges[line] & (1 << bit) != 0,
            Direction::East | Direction::West => self.west_edges[line] & (1 << bit) != 0,
        }
    }

    pub fn record_wall(&mut self, cell: Cell, dir: Direction) {
        let (line, bit) = Self::locate(cell, dir);
        match dir {
            Direction::North | Direction::South => self.south_edges[line] |= 1 << bit,
            Direction::East | Direction::West => self.west_edges[line] |= 1 << bit,
        }
    }

    /// Removes an internal wall. Outer boundary bits are left alone.
    pub fn clear_wall(&mut self, cell: Cell, dir: Direction) {
        let (line, bit) = Self::locate(cell, dir);
        let mask = !(1 << bit) | OUTER_EDGES;
        match dir {
            Direction::North | Direction::South => self.south_edges[line] &= mask,
            Direction::East | Direction::West => self.west_edges[line] &= mask,
        }
    }

    /// The cell reached by leaving `cell` toward `dir`, if no known wall blocks it.
    pub fn passage(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        if self.has_wall(cell, dir) {
            return None;
        }
        cell.neighbor(dir)
    }

    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.passage(cell, dir).map(|next| (dir, next)))
    }

    /// Number of walls recorded, counting the outer boundary.
    pub fn wall_count(&self) -> u32 {
        self.south_edges.iter().chain(&self.west_edges).map(|line| line.count_ones()).sum()
    }

    pub(crate) fn lines(&self) -> impl Iterator<Item = BoundaryLine> + '_ {
        self.south_edges.iter().chain(&self.west_edges).copied()
    }

    fn locate(cell: Cell, dir: Direction) -> (usize, u32) {
        let (x, y) = (u32::from(cell.x), u32::from(cell.y));
        match dir {
            Direction::North => (x as usize, y + 1),
            Direction::South => (x as usize, y),
            Direction::East => (y as usize, x + 1),
            Direction::West => (y as usize, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn any_cell() -> impl Strategy<Value = Cell> {
        (0..MAZE_SIZE as u8, 0..MAZE_SIZE as u8).prop_map(|(x, y)| Cell { x, y })
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        (0u8..4).prop_map(Direction::from_index)
    }

    #[test]
    fn outer_boundary_is_walled_before_any_observation() {
        let walls = WallMap::new();
        for i in 0..MAZE_SIZE as u8 {
            let last = MAZE_SIZE as u8 - 1;
            assert!(walls.has_wall(Cell { x: i, y: 0 }, Direction::South));
            assert!(walls.has_wall(Cell { x: i, y: last }, Direction::North));
            assert!(walls.has_wall(Cell { x: 0, y: i }, Direction::West));
            assert!(walls.has_wall(Cell { x: last, y: i }, Direction::East));
        }
        assert!(!walls.has_wall(Cell::START, Direction::North));
        assert!(!walls.has_wall(Cell::START, Direction::East));
        assert_eq!(walls.wall_count(), 4 * MAZE_SIZE as u32);
    }

    #[test]
    fn recording_is_idempotent() {
        let mut walls = WallMap::new();
        walls.record_wall(Cell { x: 4, y: 4 }, Direction::East);
        let once = walls.clone();
        walls.record_wall(Cell { x: 4, y: 4 }, Direction::East);
        walls.record_wall(Cell { x: 5, y: 4 }, Direction::West);
        assert_eq!(walls, once);
        assert_eq!(walls.wall_count(), 4 * MAZE_SIZE as u32 + 1);
    }

    #[test]
    fn clearing_never_opens_the_outer_boundary() {
        let mut walls = WallMap::new();
        walls.clear_wall(Cell::START, Direction::South);
        walls.clear_wall(Cell::START, Direction::West);
        assert_eq!(walls, WallMap::new());
    }

    #[test]
    fn open_neighbors_skip_walls_and_edges() {
        let mut walls = WallMap::new();
        walls.record_wall(Cell::START, Direction::North);
        let open: Vec<_> = walls.open_neighbors(Cell::START).collect();
        assert_eq!(open, vec![(Direction::East, Cell { x: 1, y: 0 })]);
    }

    proptest! {
        #[test]
        fn recorded_wall_is_visible_from_both_sides(cell in any_cell(), dir in any_direction()) {
            let mut walls = WallMap::new();
            walls.record_wall(cell, dir);
            prop_assert!(walls.has_wall(cell, dir));
            if let Some(next) = cell.neighbor(dir) {
                prop_assert!(walls.has_wall(next, dir.opposite()));
            }
        }

        #[test]
        fn symmetry_holds_for_every_boundary(
            recorded in prop::collection::vec((any_cell(), any_direction()), 0..64)
        ) {
            let mut walls = WallMap::new();
            for (cell, dir) in recorded {
                walls.record_wall(cell, dir);
            }
            for cell in Cell::all() {
                for dir in Direction::ALL {
                    match cell.neighbor(dir) {
                        Some(next) => prop_assert_eq!(
                            walls.has_wall(cell, dir),
                            walls.has_wall(next, dir.opposite())
                        ),
                        None => prop_assert!(walls.has_wall(cell, dir)),
                    }
                }
            }
        }
    }
}
