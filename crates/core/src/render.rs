//! Text rendering of a wall map in the post-and-wall maze format.
//! North is at the top. Each cell is three characters wide between posts.

use crate::agent::Agent;
use crate::types::{Cell, Direction, MAZE_SIZE};
use crate::walls::WallMap;

/// Characters per rendered line: a post plus four characters per cell.
pub const LINE_WIDTH: usize = 4 * MAZE_SIZE + 1;

/// Rendered lines: one post line above each row plus the closing bottom line.
pub const LINE_COUNT: usize = 2 * MAZE_SIZE + 1;

pub fn render_walls(walls: &WallMap, mut label: impl FnMut(Cell) -> String) -> String {
    let mut text = String::with_capacity(LINE_COUNT * (LINE_WIDTH + 1));
    for y in (0..MAZE_SIZE as u8).rev() {
        push_post_line(&mut text, |x| walls.has_wall(Cell { x, y }, Direction::North));
        for x in 0..MAZE_SIZE as u8 {
            let cell = Cell { x, y };
            text.push(if walls.has_wall(cell, Direction::West) { '|' } else { ' ' });
            text.push_str(&format!("{:>3.3}", label(cell)));
        }
        let last = Cell { x: MAZE_SIZE as u8 - 1, y };
        text.push(if walls.has_wall(last, Direction::East) { '|' } else { ' ' });
        text.push('\n');
    }
    push_post_line(&mut text, |x| walls.has_wall(Cell { x, y: 0 }, Direction::South));
    text
}

fn push_post_line(text: &mut String, walled: impl Fn(u8) -> bool) {
    for x in 0..MAZE_SIZE as u8 {
        text.push('o');
        text.push_str(if walled(x) { "---" } else { "   " });
    }
    text.push_str("o\n");
}

impl Agent {
    /// Known walls with the current distance in every visited cell and the mouse marked `@`.
    pub fn draw(&self, mouse: Option<Cell>) -> String {
        render_walls(self.walls(), |cell| {
            if Some(cell) == mouse {
                " @ ".to_string()
            } else if self.is_visited(cell) {
                self.flood().distance(cell).to_string()
            } else {
                String::new()
            }
        })
    }
}
