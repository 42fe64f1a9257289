//! Constants of the reference Divercite rule set.

use crate::game_state::divercite_types::BoardLocation;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_CENTER: i8 = 4;
pub const BOARD_RADIUS: i8 = 4;

pub const PLAYER_COUNT: u8 = 2;
pub const RESOURCES_PER_COLOR: u8 = 3;
pub const CITIES_PER_COLOR: u8 = 2;

/// Points a city earns when its four neighbors are four distinct colors.
pub const DIVERCITE_POINTS: i32 = 5;

/// Diamond-shaped playing area inside the 9x9 grid.
#[inline]
pub fn is_in_bounds(location: BoardLocation) -> bool {
    let size = BOARD_SIZE as i8;
    if location.row < 0 || location.col < 0 || location.row >= size || location.col >= size {
        return false;
    }
    (location.row - BOARD_CENTER).abs() + (location.col - BOARD_CENTER).abs() <= BOARD_RADIUS
}

/// City slots sit on odd-parity cells; every other in-bounds cell takes resources.
#[inline]
pub fn is_city_slot(location: BoardLocation) -> bool {
    is_in_bounds(location) && (location.row + location.col) % 2 == 1
}

pub fn in_bounds_locations() -> impl Iterator<Item = BoardLocation> {
    (0..BOARD_SIZE as i8)
        .flat_map(|row| (0..BOARD_SIZE as i8).map(move |col| BoardLocation::new(row, col)))
        .filter(|&location| is_in_bounds(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_has_expected_slot_counts() {
        let cells: Vec<_> = in_bounds_locations().collect();
        let cities = cells.iter().filter(|&&loc| is_city_slot(loc)).count();

        assert_eq!(cells.len(), 41);
        assert_eq!(cities, 16);
        assert_eq!(cells.len() - cities, 25);
    }

    #[test]
    fn corners_are_out_of_bounds() {
        assert!(!is_in_bounds(BoardLocation::new(0, 0)));
        assert!(!is_in_bounds(BoardLocation::new(-1, 4)));
        assert!(is_in_bounds(BoardLocation::new(0, 4)));
        assert!(is_in_bounds(BoardLocation::new(4, 8)));
    }
}
