//! Deterministic maze generation for simulation runs and fuzzing.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use super::layout::MazeLayout;
use crate::grid::CellGrid;
use crate::types::{Cell, Direction, MAZE_SIZE};
use crate::walls::WallMap;

/// A perfect maze: every cell reachable from the start by exactly one path, except inside
/// the center quartet, which is opened into a single room.
pub fn generate(seed: u64) -> MazeLayout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut walls = WallMap::closed();
    let mut seen = CellGrid::filled(false);
    let mut stack = vec![Cell::START];
    seen[Cell::START] = true;

    while let Some(&cell) = stack.last() {
        let options: Vec<(Direction, Cell)> = Direction::ALL
            .into_iter()
            .filter_map(|dir| cell.neighbor(dir).map(|next| (dir, next)))
            .filter(|&(_, next)| !seen[next])
            .collect();
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let (dir, next) = options[pick(&mut rng, options.len())];
        walls.clear_wall(cell, dir);
        seen[next] = true;
        stack.push(next);
    }

    open_center(&mut walls);
    MazeLayout::from_walls(walls)
}

/// A perfect maze with `openings` extra internal walls knocked out, giving it loops.
pub fn generate_with_loops(seed: u64, openings: usize) -> MazeLayout {
    let mut layout = generate(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    for _ in 0..openings {
        let x = pick(&mut rng, MAZE_SIZE) as u8;
        let y = pick(&mut rng, MAZE_SIZE) as u8;
        let dir = Direction::from_index(pick(&mut rng, 4) as u8);
        layout.walls_mut().clear_wall(Cell { x, y }, dir);
    }
    layout
}

fn open_center(walls: &mut WallMap) {
    let [south_west, _, _, north_east] = Cell::CENTER;
    walls.clear_wall(south_west, Direction::East);
    walls.clear_wall(south_west, Direction::North);
    walls.clear_wall(north_east, Direction::West);
    walls.clear_wall(north_east, Direction::South);
}

fn pick(rng: &mut ChaCha8Rng, len: usize) -> usize {
    rng.next_u64() as usize % len
}
