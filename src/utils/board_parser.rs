//! Plain-text layout to `DiverciteBoard` parser.
//!
//! A layout is an optional `to_move <seat>` header followed by nine rows of
//! nine whitespace-separated tokens:
//!
//! - `-` off-board cell (must match the diamond)
//! - `.` empty slot
//! - `<color><category><owner>` piece, e.g. `RC0` (red city of seat 0) or
//!   `YR1` (yellow resource placed by seat 1)
//!
//! Blank lines and lines starting with `#` are ignored. Inventories are the
//! starting ones minus the pieces on the board. Without a header the side to
//! move follows from how many pieces are down.

use crate::game_state::divercite_board::DiverciteBoard;
use crate::game_state::divercite_rules::{
    is_city_slot, is_in_bounds, BOARD_SIZE, CITIES_PER_COLOR, PLAYER_COUNT, RESOURCES_PER_COLOR,
};
use crate::game_state::divercite_types::*;

pub fn parse_board_layout(layout: &str) -> Result<DiverciteBoard, String> {
    let mut lines = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .peekable();

    let mut side_to_move = None;
    if let Some(header) = lines
        .peek()
        .copied()
        .and_then(|line| line.strip_prefix("to_move"))
    {
        side_to_move = Some(parse_side_to_move(header)?);
        lines.next();
    }

    let rows: Vec<&str> = lines.collect();
    if rows.len() != BOARD_SIZE {
        return Err(format!(
            "Board layout must contain {BOARD_SIZE} rows, found {}",
            rows.len()
        ));
    }

    let mut board = DiverciteBoard::new_game();
    let mut inventories =
        [Inventory::uniform(RESOURCES_PER_COLOR, CITIES_PER_COLOR); PLAYER_COUNT as usize];

    for (row, row_str) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row_str.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(format!(
                "Row {row} must contain {BOARD_SIZE} cells, found {}",
                tokens.len()
            ));
        }

        for (col, token) in tokens.iter().enumerate() {
            let location = BoardLocation::new(row as i8, col as i8);
            match *token {
                "-" => {
                    if is_in_bounds(location) {
                        return Err(format!("Cell {location} is on the board but marked '-'"));
                    }
                }
                "." => {
                    if !is_in_bounds(location) {
                        return Err(format!("Cell {location} is off the board but marked '.'"));
                    }
                }
                _ => {
                    let piece = parse_piece(token)?;
                    check_slot(location, piece)?;

                    let inventory = &mut inventories[piece.owner.index()];
                    if !inventory.take(piece.category, piece.color) {
                        return Err(format!(
                            "{} placed more {:?} {:?} pieces than it owns",
                            piece.owner, piece.color, piece.category
                        ));
                    }

                    board
                        .set_piece(location, Some(piece))
                        .map_err(|e| e.to_string())?;
                }
            }
        }
    }

    for (seat, inventory) in inventories.into_iter().enumerate() {
        board
            .set_inventory(PlayerId(seat as u8), inventory)
            .map_err(|e| e.to_string())?;
    }
    let placed = u16::try_from(board.placed_piece_count())
        .map_err(|_| "Too many pieces on the board".to_owned())?;
    board.set_ply(placed);
    let side_to_move = side_to_move.unwrap_or(PlayerId((placed % u16::from(PLAYER_COUNT)) as u8));
    board
        .set_side_to_move(side_to_move)
        .map_err(|e| e.to_string())?;

    Ok(board)
}

fn parse_side_to_move(header: &str) -> Result<PlayerId, String> {
    let seat = header
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("Invalid side-to-move seat '{}'", header.trim()))?;
    if seat >= PLAYER_COUNT {
        return Err(format!("Seat {seat} is not at the table"));
    }
    Ok(PlayerId(seat))
}

fn parse_piece(token: &str) -> Result<Piece, String> {
    let chars: Vec<char> = token.chars().collect();
    let [color_ch, category_ch, owner_ch] = chars[..] else {
        return Err(format!("Invalid piece token '{token}'"));
    };

    let color = ResourceColor::from_letter(color_ch)
        .ok_or_else(|| format!("Invalid color '{color_ch}' in '{token}'"))?;
    let category = PieceCategory::from_letter(category_ch)
        .ok_or_else(|| format!("Invalid category '{category_ch}' in '{token}'"))?;
    let owner = owner_ch
        .to_digit(10)
        .filter(|&seat| seat < u32::from(PLAYER_COUNT))
        .ok_or_else(|| format!("Invalid owner '{owner_ch}' in '{token}'"))?;

    Ok(Piece::new(color, category, PlayerId(owner as u8)))
}

fn check_slot(location: BoardLocation, piece: Piece) -> Result<(), String> {
    if !is_in_bounds(location) {
        return Err(format!("Piece placed off the board at {location}"));
    }
    if piece.is_city() != is_city_slot(location) {
        return Err(format!(
            "{:?} cannot stand on {location}",
            piece.category
        ));
    }
    Ok(())
}
