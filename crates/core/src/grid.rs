//! Fixed-size per-cell storage shared by the distance field, frontier, and visit markers.

use std::array;
use std::ops::{Index, IndexMut};

use crate::types::{Cell, MAZE_SIZE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid<T> {
    cells: [[T; MAZE_SIZE]; MAZE_SIZE],
}

impl<T: Copy> CellGrid<T> {
    pub fn filled(value: T) -> Self {
        Self { cells: [[value; MAZE_SIZE]; MAZE_SIZE] }
    }

    pub fn from_fn(mut f: impl FnMut(Cell) -> T) -> Self {
        let cells =
            array::from_fn(|x| array::from_fn(|y| f(Cell { x: x as u8, y: y as u8 })));
        Self { cells }
    }

    pub fn fill(&mut self, value: T) {
        for column in &mut self.cells {
            column.fill(value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, T)> + '_ {
        Cell::all().map(|cell| (cell, self[cell]))
    }
}

impl<T> Index<Cell> for CellGrid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        &self.cells[usize::from(cell.x)][usize::from(cell.y)]
    }
}

impl<T> IndexMut<Cell> for CellGrid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        &mut self.cells[usize::from(cell.x)][usize::from(cell.y)]
    }
}
