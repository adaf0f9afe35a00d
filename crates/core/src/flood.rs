//! Distance field toward the active target region and its incremental re-flooding.
//! This module exists so stale distances can be repaired locally after a wall discovery
//! or a target change instead of recomputing the whole grid.
//! It does not own move selection or mission sequencing.

use crate::grid::CellGrid;
use crate::types::{CELL_COUNT, Cell, MAZE_SIZE, Target};
use crate::walls::WallMap;

/// Ceiling for stored distances. A cell sealed off from every target settles here
/// instead of counting upward forever.
pub const UNREACHABLE: u16 = CELL_COUNT as u16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    values: CellGrid<u16>,
}

impl DistanceField {
    /// Wall-free Manhattan distance to the nearest center cell.
    pub fn manhattan_to_center() -> Self {
        let half = (MAZE_SIZE / 2) as u16;
        let axis = |v: u8| {
            let v = u16::from(v);
            if v < half { half - 1 - v } else { v - half }
        };
        Self { values: CellGrid::from_fn(|cell| axis(cell.x) + axis(cell.y)) }
    }

    pub fn get(&self, cell: Cell) -> u16 {
        self.values[cell]
    }

    pub fn set(&mut self, cell: Cell, value: u16) {
        self.values[cell] = value.min(UNREACHABLE);
    }

    /// Zeroes the given cells. Every other cell keeps its value until propagation reaches it.
    pub fn reset(&mut self, targets: &[Cell]) {
        for &cell in targets {
            self.values[cell] = 0;
        }
    }

    pub fn min_open_neighbor(&self, walls: &WallMap, cell: Cell) -> Option<u16> {
        walls.open_neighbors(cell).map(|(_, next)| self.values[next]).min()
    }

    /// The value `cell` should hold given its open neighbors, or `None` when it has none.
    pub fn derived(&self, walls: &WallMap, cell: Cell) -> Option<u16> {
        self.min_open_neighbor(walls, cell).map(|min| (min + 1).min(UNREACHABLE))
    }

    /// True when every target cell is zero and every other connected cell sits one above
    /// its lowest open neighbor.
    pub fn is_settled(&self, walls: &WallMap, target: Target) -> bool {
        Cell::all().all(|cell| {
            if target.contains(cell) {
                return self.values[cell] == 0;
            }
            self.derived(walls, cell).is_none_or(|value| value == self.values[cell])
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, u16)> + '_ {
        self.values.iter()
    }
}

/// LIFO work-list of cells awaiting re-evaluation. A cell is on the stack at most once.
#[derive(Clone, Debug)]
pub struct Frontier {
    stack: Vec<Cell>,
    queued: CellGrid<bool>,
}

impl Default for Frontier {
    fn default() -> Self {
        Self { stack: Vec::with_capacity(CELL_COUNT), queued: CellGrid::filled(false) }
    }
}

impl Frontier {
    /// Returns false when the cell was already waiting.
    pub fn push(&mut self, cell: Cell) -> bool {
        if self.queued[cell] {
            return false;
        }
        self.queued[cell] = true;
        self.stack.push(cell);
        true
    }

    pub fn pop(&mut self) -> Option<Cell> {
        let cell = self.stack.pop()?;
        self.queued[cell] = false;
        Some(cell)
    }

    pub fn is_queued(&self, cell: Cell) -> bool {
        self.queued[cell]
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodStats {
    pub pops: u32,
    pub relaxations: u32,
}

/// Distance field plus the pending work that keeps it consistent with the known walls.
#[derive(Clone, Debug)]
pub struct FloodFill {
    field: DistanceField,
    frontier: Frontier,
}

impl Default for FloodFill {
    fn default() -> Self {
        Self::new()
    }
}

impl FloodFill {
    pub fn new() -> Self {
        Self { field: DistanceField::manhattan_to_center(), frontier: Frontier::default() }
    }

    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn distance(&self, cell: Cell) -> u16 {
        self.field.get(cell)
    }

    pub fn enqueue(&mut self, cell: Cell) -> bool {
        self.frontier.push(cell)
    }

    pub fn reset(&mut self, target: Target) {
        self.field.reset(target.cells());
    }

    /// Relaxes queued cells until the work-list drains. Target cells are never rewritten.
    pub fn propagate(&mut self, walls: &WallMap, target: Target, seeds: &[Cell]) -> FloodStats {
        for &seed in seeds {
            self.frontier.push(seed);
        }

        let mut stats = FloodStats::default();
        while let Some(cell) = self.frontier.pop() {
            stats.pops += 1;
            if target.contains(cell) {
                continue;
            }
            let Some(value) = self.field.derived(walls, cell) else {
                continue;
            };
            if self.field.get(cell) == value {
                continue;
            }

            self.field.set(cell, value);
            stats.relaxations += 1;
            for (_, next) in walls.open_neighbors(cell) {
                self.frontier.push(next);
            }
        }
        stats
    }
}
