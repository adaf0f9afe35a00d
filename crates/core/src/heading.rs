//! Translation between the mouse's heading frame and the absolute compass frame.
//! Both directions of the mapping are a rotation by the heading's index, so
//! `to_absolute(h, to_relative(h, d)) == d` holds for every heading and direction.

use crate::types::{Direction, Relative};

pub fn to_absolute(heading: Direction, relative: Relative) -> Direction {
    Direction::from_index(heading.index() + relative.index())
}

pub fn to_relative(heading: Direction, absolute: Direction) -> Relative {
    Relative::from_index(absolute.index() + 4 - heading.index())
}

pub fn turn_left(heading: Direction) -> Direction {
    to_absolute(heading, Relative::Left)
}

pub fn turn_right(heading: Direction) -> Direction {
    to_absolute(heading, Relative::Right)
}
