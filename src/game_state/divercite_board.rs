//! Reference Divercite engine.
//!
//! `DiverciteBoard` is a plain value type: placing a piece clones the board
//! and returns the successor, so the search can branch over siblings without
//! any undo bookkeeping. Scores are recomputed from the cities after every
//! placement.

use crate::game_state::divercite_rules::{
    in_bounds_locations, is_city_slot, is_in_bounds, BOARD_SIZE, CITIES_PER_COLOR,
    DIVERCITE_POINTS, PLAYER_COUNT, RESOURCES_PER_COLOR,
};
use crate::game_state::divercite_types::*;
use crate::game_state::game_engine::{EngineError, EngineResult, GameEngineState, GeneratedAction};

/// Place one piece from the mover's inventory on an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementAction {
    pub color: ResourceColor,
    pub category: PieceCategory,
    pub location: BoardLocation,
}

impl PlacementAction {
    #[inline]
    pub const fn new(color: ResourceColor, category: PieceCategory, location: BoardLocation) -> Self {
        Self {
            color,
            category,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiverciteBoard {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    inventories: [Inventory; PLAYER_COUNT as usize],
    scores: [i32; PLAYER_COUNT as usize],
    side_to_move: PlayerId,
    ply: u16,
}

impl Default for DiverciteBoard {
    fn default() -> Self {
        Self::new_game()
    }
}

impl DiverciteBoard {
    /// Empty board, full inventories, seat 0 to move.
    pub fn new_game() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            inventories: [Inventory::uniform(RESOURCES_PER_COLOR, CITIES_PER_COLOR);
                PLAYER_COUNT as usize],
            scores: [0; PLAYER_COUNT as usize],
            side_to_move: PlayerId(0),
            ply: 0,
        }
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    pub fn piece_at(&self, location: BoardLocation) -> Option<Piece> {
        if !is_in_bounds(location) {
            return None;
        }
        self.cells[location.row as usize][location.col as usize]
    }

    pub fn cell_content(&self, location: BoardLocation) -> CellContent {
        if !is_in_bounds(location) {
            return CellContent::OutOfBounds;
        }
        match self.cells[location.row as usize][location.col as usize] {
            Some(piece) => CellContent::Occupied(piece),
            None => CellContent::Empty,
        }
    }

    /// Puts a piece on the board without consuming inventory or passing the
    /// turn. Used by layout parsing; scores are refreshed.
    pub fn set_piece(&mut self, location: BoardLocation, piece: Option<Piece>) -> EngineResult<()> {
        if !is_in_bounds(location) {
            return Err(EngineError::InvalidState(format!(
                "location {location} is outside the board"
            )));
        }
        self.cells[location.row as usize][location.col as usize] = piece;
        self.refresh_scores();
        Ok(())
    }

    pub fn set_side_to_move(&mut self, player: PlayerId) -> EngineResult<()> {
        if player.0 >= PLAYER_COUNT {
            return Err(EngineError::InvalidState(format!("{player} is not seated")));
        }
        self.side_to_move = player;
        Ok(())
    }

    pub fn set_inventory(&mut self, player: PlayerId, inventory: Inventory) -> EngineResult<()> {
        let slot = self
            .inventories
            .get_mut(player.index())
            .ok_or_else(|| EngineError::InvalidState(format!("{player} is not seated")))?;
        *slot = inventory;
        Ok(())
    }

    pub fn set_ply(&mut self, ply: u16) {
        self.ply = ply;
    }

    pub fn placed_piece_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    fn next_player(&self) -> PlayerId {
        PlayerId((self.side_to_move.0 + 1) % PLAYER_COUNT)
    }

    fn validate(&self, action: &PlacementAction) -> EngineResult<()> {
        let location = action.location;
        if !is_in_bounds(location) {
            return Err(EngineError::IllegalAction(format!(
                "{location} is outside the board"
            )));
        }
        if self.piece_at(location).is_some() {
            return Err(EngineError::IllegalAction(format!("{location} is occupied")));
        }
        let wants_city = matches!(action.category, PieceCategory::City);
        if wants_city != is_city_slot(location) {
            return Err(EngineError::IllegalAction(format!(
                "{:?} cannot be placed on {location}",
                action.category
            )));
        }
        let inventory = self.inventories[self.side_to_move.index()];
        if inventory.count(action.category, action.color) == 0 {
            return Err(EngineError::IllegalAction(format!(
                "{} has no {:?} {:?} left",
                self.side_to_move, action.color, action.category
            )));
        }
        Ok(())
    }

    fn refresh_scores(&mut self) {
        let mut scores = [0i32; PLAYER_COUNT as usize];
        for (location, city) in self.city_cells() {
            if let Some(slot) = scores.get_mut(city.owner.index()) {
                *slot += self.city_points(location, city);
            }
        }
        self.scores = scores;
    }

    /// Five for a full set of distinct neighbor colors, otherwise one point
    /// per neighboring resource of the city's own color.
    fn city_points(&self, location: BoardLocation, city: Piece) -> i32 {
        let mut seen = [false; 4];
        let mut distinct = 0;
        let mut matching = 0;

        for direction in Direction::ALL {
            let Some(piece) = location
                .offset(direction)
                .and_then(|neighbor| self.piece_at(neighbor))
            else {
                continue;
            };
            if piece.is_city() {
                continue;
            }
            if piece.color == city.color {
                matching += 1;
            }
            if !seen[piece.color.index()] {
                seen[piece.color.index()] = true;
                distinct += 1;
            }
        }

        if distinct == 4 {
            DIVERCITE_POINTS
        } else {
            matching
        }
    }
}

impl GameEngineState for DiverciteBoard {
    type Action = PlacementAction;

    fn players(&self) -> Vec<PlayerId> {
        (0..PLAYER_COUNT).map(PlayerId).collect()
    }

    fn side_to_move(&self) -> PlayerId {
        self.side_to_move
    }

    fn is_terminal(&self) -> bool {
        self.inventories.iter().all(Inventory::is_empty)
    }

    fn legal_actions(&self) -> EngineResult<Vec<GeneratedAction<Self>>> {
        if self.is_terminal() {
            return Ok(Vec::new());
        }

        let inventory = self.inventories[self.side_to_move.index()];
        let mut actions = Vec::new();

        for location in in_bounds_locations() {
            if self.piece_at(location).is_some() {
                continue;
            }
            let category = if is_city_slot(location) {
                PieceCategory::City
            } else {
                PieceCategory::Resource
            };
            for color in ResourceColor::ALL {
                if inventory.count(category, color) == 0 {
                    continue;
                }
                let action = PlacementAction::new(color, category, location);
                let state_after = self.apply(&action)?;
                actions.push(GeneratedAction {
                    action,
                    state_after,
                });
            }
        }

        Ok(actions)
    }

    fn apply(&self, action: &PlacementAction) -> EngineResult<Self> {
        self.validate(action)?;

        let mut next = self.clone();
        let mover = self.side_to_move;
        next.inventories[mover.index()].take(action.category, action.color);
        next.cells[action.location.row as usize][action.location.col as usize] =
            Some(Piece::new(action.color, action.category, mover));
        next.side_to_move = self.next_player();
        next.ply = self.ply.saturating_add(1);
        next.refresh_scores();

        Ok(next)
    }

    fn score(&self, player: PlayerId) -> i32 {
        self.scores.get(player.index()).copied().unwrap_or(0)
    }

    fn remaining_inventory(&self, player: PlayerId) -> Inventory {
        self.inventories
            .get(player.index())
            .copied()
            .unwrap_or_default()
    }

    fn city_cells(&self) -> Vec<(BoardLocation, Piece)> {
        in_bounds_locations()
            .filter_map(|location| match self.piece_at(location) {
                Some(piece) if piece.is_city() => Some((location, piece)),
                _ => None,
            })
            .collect()
    }

    fn neighbors(&self, location: BoardLocation) -> [Neighbor; 4] {
        Direction::ALL.map(|direction| {
            let neighbor = location.offset(direction);
            Neighbor {
                direction,
                content: neighbor.map_or(CellContent::OutOfBounds, |cell| self.cell_content(cell)),
                location: neighbor,
            }
        })
    }
}
