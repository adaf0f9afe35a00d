//! Move ranking over the distance field and conversion of the chosen move into a command.
//! This module exists so the heading tie-break and the absolute-to-relative translation
//! live in one place.
//! It does not own re-flooding; callers re-run ranking after propagating.

use crate::flood::DistanceField;
use crate::heading::to_relative;
use crate::types::{Cell, Command, Direction, Relative};
use crate::walls::WallMap;

/// Candidate order before the heading swap: north, south, east, west.
const SCAN_ORDER: [Direction; 4] =
    [Direction::North, Direction::South, Direction::East, Direction::West];

/// Feasible, progress-making moves from one cell, best first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveRanking {
    moves: Vec<Direction>,
}

impl MoveRanking {
    pub fn best(&self) -> Option<Direction> {
        self.moves.first().copied()
    }

    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Ranks the four moves out of `cell`.
///
/// A move survives only if it leads to a strictly lower distance and no known wall blocks it.
/// Equal distances keep the heading-first scan order, so the mouse prefers to keep going
/// straight.
pub fn rank_moves(
    walls: &WallMap,
    field: &DistanceField,
    cell: Cell,
    heading: Direction,
) -> MoveRanking {
    let here = field.get(cell);
    let mut candidates: [(Direction, Option<u16>); 4] = SCAN_ORDER.map(|dir| {
        let distance = cell.neighbor(dir).map(|next| field.get(next)).filter(|&d| d < here);
        (dir, distance)
    });

    if let Some(slot) = candidates.iter().position(|(dir, _)| *dir == heading) {
        candidates.swap(0, slot);
    }
    candidates.sort_by_key(|&(_, distance)| distance.map_or(u32::MAX, u32::from));

    let moves = candidates
        .into_iter()
        .filter(|&(dir, distance)| distance.is_some() && !walls.has_wall(cell, dir))
        .map(|(dir, _)| dir)
        .collect();
    MoveRanking { moves }
}

/// Command that starts the mouse toward `best`, along with the heading it leaves the mouse in.
pub fn to_command(best: Option<Direction>, heading: Direction) -> (Command, Direction) {
    let Some(best) = best else {
        return (Command::Finish, heading);
    };
    let command = match to_relative(heading, best) {
        Relative::Front => Command::MoveForward,
        Relative::Left => Command::TurnCounterClockwise,
        Relative::Right => Command::TurnClockwise,
        Relative::Back => Command::TurnAround,
    };
    (command, best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flood::FloodFill;
    use crate::types::Target;

    #[test]
    fn open_grid_start_prefers_straight_ahead_on_ties() {
        let walls = WallMap::new();
        let field = DistanceField::manhattan_to_center();

        let north = rank_moves(&walls, &field, Cell::START, Direction::North);
        assert_eq!(north.moves(), &[Direction::North, Direction::East]);

        let east = rank_moves(&walls, &field, Cell::START, Direction::East);
        assert_eq!(east.moves(), &[Direction::East, Direction::North]);
    }

    #[test]
    fn wall_north_of_start_is_never_proposed() {
        let mut walls = WallMap::new();
        walls.record_wall(Cell::START, Direction::North);
        let field = DistanceField::manhattan_to_center();

        for heading in Direction::ALL {
            let ranking = rank_moves(&walls, &field, Cell::START, heading);
            assert!(!ranking.moves().contains(&Direction::North), "heading {heading:?}");
            assert_eq!(ranking.best(), Some(Direction::East));
        }
    }

    #[test]
    fn lower_distance_beats_heading_preference() {
        let walls = WallMap::new();
        let mut field = DistanceField::manhattan_to_center();
        let cell = Cell { x: 3, y: 3 };
        field.set(Cell { x: 3, y: 4 }, 2);

        let ranking = rank_moves(&walls, &field, cell, Direction::East);
        assert_eq!(ranking.moves(), &[Direction::North, Direction::East]);
    }

    #[test]
    fn swap_places_displaced_north_in_the_heading_slot() {
        // Heading west trades places with north in the scan order.
        let walls = WallMap::new();
        let mut field = DistanceField::manhattan_to_center();
        let cell = Cell { x: 5, y: 5 };
        field.set(cell, 10);
        for dir in Direction::ALL {
            if let Some(next) = cell.neighbor(dir) {
                field.set(next, 4);
            }
        }

        let ranking = rank_moves(&walls, &field, cell, Direction::West);
        assert_eq!(
            ranking.moves(),
            &[Direction::West, Direction::South, Direction::East, Direction::North]
        );
    }

    #[test]
    fn no_progress_yields_empty_ranking() {
        let mut walls = WallMap::new();
        let field = DistanceField::manhattan_to_center();
        walls.record_wall(Cell::START, Direction::North);
        walls.record_wall(Cell::START, Direction::East);

        let ranking = rank_moves(&walls, &field, Cell::START, Direction::North);
        assert!(ranking.is_empty());
        assert_eq!(ranking.best(), None);
    }

    #[test]
    fn center_cell_has_no_progress_move_toward_the_center() {
        let flood = FloodFill::new();
        let ranking = rank_moves(&WallMap::new(), flood.field(), Cell::CENTER[0], Direction::North);
        assert!(ranking.is_empty());
        assert!(flood.field().is_settled(&WallMap::new(), Target::Center));
    }

    #[test]
    fn commands_follow_the_relative_turn() {
        assert_eq!(
            to_command(Some(Direction::North), Direction::North),
            (Command::MoveForward, Direction::North)
        );
        assert_eq!(
            to_command(Some(Direction::West), Direction::North),
            (Command::TurnCounterClockwise, Direction::West)
        );
        assert_eq!(
            to_command(Some(Direction::South), Direction::East),
            (Command::TurnClockwise, Direction::South)
        );
        assert_eq!(
            to_command(Some(Direction::East), Direction::West),
            (Command::TurnAround, Direction::East)
        );
        assert_eq!(to_command(None, Direction::South), (Command::Finish, Direction::South));
    }
}
