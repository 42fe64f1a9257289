//! Static evaluation of positions for the search.
//!
//! Scores are always taken from a fixed perspective (the searching seat),
//! never from the side to move, so the alpha-beta core keeps explicit max and
//! min layers instead of negating values per ply.

use crate::game_state::divercite_types::{
    BoardLocation, CellContent, PieceCategory, PlayerId, ResourceColor,
};
use crate::game_state::game_engine::GameEngineState;

/// Pluggable leaf scorer.
pub trait StateEvaluator<S: GameEngineState>: Send + Sync {
    /// Score of `state` from `perspective`'s point of view. Must be pure.
    fn evaluate(&self, state: &S, perspective: PlayerId) -> i32;
}

/// Engine score of `perspective` minus the combined engine score of every
/// other seat. This is the true utility of a finished game.
pub fn final_score_differential<S: GameEngineState>(state: &S, perspective: PlayerId) -> i32 {
    state
        .scores()
        .into_iter()
        .map(|(player, score)| if player == perspective { score } else { -score })
        .sum()
}

/// Bonus for a city with `distinct_colors` achievable neighbor colors.
#[inline]
pub const fn diversity_bonus(distinct_colors: usize) -> i32 {
    match distinct_colors {
        2 => 2,
        3 => 3,
        4 => 5,
        _ => 0,
    }
}

/// Diversity contribution of the city at `location` owned by `owner`.
///
/// Neighbors that are empty, off the board, or not resources do not
/// contribute. A repeated color, or a missing color the owner can no longer
/// place, makes the city worth nothing.
pub fn city_diversity<S: GameEngineState>(
    state: &S,
    location: BoardLocation,
    owner: PlayerId,
) -> i32 {
    let mut seen = [false; 4];
    let mut distinct = 0usize;

    for neighbor in state.neighbors(location) {
        let CellContent::Occupied(piece) = neighbor.content else {
            continue;
        };
        if piece.category != PieceCategory::Resource {
            continue;
        }
        let slot = &mut seen[piece.color.index()];
        if *slot {
            return 0;
        }
        *slot = true;
        distinct += 1;
    }

    if (1..ResourceColor::ALL.len()).contains(&distinct) {
        let inventory = state.remaining_inventory(owner);
        let missing_unplaceable = ResourceColor::ALL.iter().any(|&color| {
            !seen[color.index()] && inventory.count(PieceCategory::Resource, color) == 0
        });
        if missing_unplaceable {
            return 0;
        }
    }

    diversity_bonus(distinct)
}

/// Sum of `city_diversity` over every city owned by `player`.
pub fn diversity_index<S: GameEngineState>(state: &S, player: PlayerId) -> i32 {
    state
        .city_cells()
        .into_iter()
        .filter(|(_, piece)| piece.is_city() && piece.owner == player)
        .map(|(location, _)| city_diversity(state, location, player))
        .sum()
}

/// Engine score plus diversity index, mine minus everyone else's.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiversityEvaluator;

impl<S: GameEngineState> StateEvaluator<S> for DiversityEvaluator {
    fn evaluate(&self, state: &S, perspective: PlayerId) -> i32 {
        state
            .players()
            .into_iter()
            .map(|player| {
                let total = state.score(player) + diversity_index(state, player);
                if player == perspective {
                    total
                } else {
                    -total
                }
            })
            .sum()
    }
}

/// Engine score differential only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreDifferenceEvaluator;

impl<S: GameEngineState> StateEvaluator<S> for ScoreDifferenceEvaluator {
    fn evaluate(&self, state: &S, perspective: PlayerId) -> i32 {
        final_score_differential(state, perspective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::divercite_board::DiverciteBoard;
    use crate::game_state::divercite_types::{Inventory, Piece};

    const A: PlayerId = PlayerId(0);
    const B: PlayerId = PlayerId(1);

    fn loc(row: i8, col: i8) -> BoardLocation {
        BoardLocation::new(row, col)
    }

    fn place(board: &mut DiverciteBoard, location: BoardLocation, piece: Piece) {
        board
            .set_piece(location, Some(piece))
            .expect("location should be on the board");
    }

    fn resource(color: ResourceColor) -> Piece {
        Piece::new(color, PieceCategory::Resource, B)
    }

    /// City of `owner` at (4, 3) with the given neighbor colors at
    /// top, bottom, left, right (None leaves the slot empty).
    fn city_with_neighbors(owner: PlayerId, colors: [Option<ResourceColor>; 4]) -> DiverciteBoard {
        let mut board = DiverciteBoard::new_game();
        place(
            &mut board,
            loc(4, 3),
            Piece::new(ResourceColor::Red, PieceCategory::City, owner),
        );
        for (location, color) in [loc(3, 3), loc(5, 3), loc(4, 2), loc(4, 4)]
            .into_iter()
            .zip(colors)
        {
            if let Some(color) = color {
                place(&mut board, location, resource(color));
            }
        }
        board
    }

    #[test]
    fn bonus_table_is_exact() {
        assert_eq!(diversity_bonus(0), 0);
        assert_eq!(diversity_bonus(1), 0);
        assert_eq!(diversity_bonus(2), 2);
        assert_eq!(diversity_bonus(3), 3);
        assert_eq!(diversity_bonus(4), 5);
    }

    #[test]
    fn empty_board_evaluates_to_zero() {
        let board = DiverciteBoard::new_game();
        assert_eq!(DiversityEvaluator.evaluate(&board, A), 0);
        assert_eq!(DiversityEvaluator.evaluate(&board, B), 0);
    }

    #[test]
    fn fully_diverse_city_adds_five() {
        use ResourceColor::*;
        let board = city_with_neighbors(A, [Some(Red), Some(Green), Some(Blue), Some(Yellow)]);

        assert_eq!(diversity_index(&board, A), 5);
        // Engine already scores the divercite (5), the heuristic adds another 5.
        assert_eq!(board.score(A), 5);
        assert_eq!(DiversityEvaluator.evaluate(&board, A), 10);
        assert_eq!(DiversityEvaluator.evaluate(&board, B), -10);
    }

    #[test]
    fn repeated_color_cancels_the_city() {
        use ResourceColor::*;
        let board = city_with_neighbors(A, [Some(Green), Some(Green), Some(Blue), None]);
        assert_eq!(city_diversity(&board, loc(4, 3), A), 0);
    }

    #[test]
    fn unplaceable_missing_color_cancels_the_city() {
        use ResourceColor::*;
        let mut board = city_with_neighbors(A, [Some(Red), Some(Green), Some(Blue), None]);
        assert_eq!(city_diversity(&board, loc(4, 3), A), 3);

        let mut inventory = Inventory::uniform(3, 2);
        inventory.set(PieceCategory::Resource, Yellow, 0);
        board.set_inventory(A, inventory).expect("seat 0 exists");

        assert_eq!(city_diversity(&board, loc(4, 3), A), 0);
    }

    #[test]
    fn two_colors_score_two() {
        use ResourceColor::*;
        let board = city_with_neighbors(B, [Some(Yellow), None, Some(Blue), None]);
        assert_eq!(diversity_index(&board, B), 2);
        assert_eq!(diversity_index(&board, A), 0);
    }

    #[test]
    fn diversity_is_computed_per_owner() {
        use ResourceColor::*;
        let mut board = city_with_neighbors(A, [Some(Red), Some(Green), Some(Blue), Some(Yellow)]);
        // Opponent city at (3, 4): shares (3, 3) and (4, 4) with A's city.
        place(
            &mut board,
            loc(3, 4),
            Piece::new(ResourceColor::Green, PieceCategory::City, B),
        );
        place(&mut board, loc(2, 4), resource(Green));

        let a_total = board.score(A) + diversity_index(&board, A);
        let b_total = board.score(B) + diversity_index(&board, B);

        assert_eq!(diversity_index(&board, A), 5);
        // B's city sees red, yellow and green: three colors, blue still placeable.
        assert_eq!(diversity_index(&board, B), 3);
        assert_eq!(DiversityEvaluator.evaluate(&board, A), a_total - b_total);
        assert_eq!(DiversityEvaluator.evaluate(&board, B), b_total - a_total);
    }

    #[test]
    fn base_term_is_antisymmetric() {
        use ResourceColor::*;
        let board = city_with_neighbors(B, [Some(Red), Some(Red), None, None]);
        assert_eq!(
            ScoreDifferenceEvaluator.evaluate(&board, A),
            -ScoreDifferenceEvaluator.evaluate(&board, B)
        );
        assert_eq!(final_score_differential(&board, B), 2);
    }

    #[test]
    fn city_neighbors_do_not_contribute_colors() {
        let mut board = DiverciteBoard::new_game();
        place(
            &mut board,
            loc(4, 3),
            Piece::new(ResourceColor::Red, PieceCategory::City, A),
        );
        // Not a legal layout, but must degrade to "non-contributing".
        place(
            &mut board,
            loc(4, 4),
            Piece::new(ResourceColor::Blue, PieceCategory::City, B),
        );
        place(&mut board, loc(3, 3), resource(ResourceColor::Green));
        place(&mut board, loc(5, 3), resource(ResourceColor::Blue));

        // The blue city is ignored, so the blue resource is not a repeat.
        assert_eq!(city_diversity(&board, loc(4, 3), A), 2);
    }
}
