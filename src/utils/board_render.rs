//! `DiverciteBoard` to plain-text layout.
//!
//! Output is accepted by `parse_board_layout`, so boards can be dumped from a
//! failing search and pasted back into a test. The leading `# ply` line is a
//! comment to the parser.

use crate::game_state::divercite_board::DiverciteBoard;
use crate::game_state::divercite_rules::BOARD_SIZE;
use crate::game_state::divercite_types::{BoardLocation, CellContent};
use crate::game_state::game_engine::GameEngineState;

pub fn render_board(board: &DiverciteBoard) -> String {
    let mut out = format!("# ply {}\nto_move {}\n", board.ply(), board.side_to_move().0);

    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let location = BoardLocation::new(row as i8, col as i8);
                format!("{:<3}", cell_token(board.cell_content(location)))
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }

    out
}

fn cell_token(content: CellContent) -> String {
    match content {
        CellContent::OutOfBounds => "-".to_owned(),
        CellContent::Empty => ".".to_owned(),
        CellContent::Occupied(piece) => format!(
            "{}{}{}",
            piece.color.letter(),
            piece.category.letter(),
            piece.owner.0
        ),
    }
}
