//! Contract between the search core and a Game Engine.
//!
//! The search never inspects board internals directly. Everything it needs
//! (legal actions, successor states, scores, inventories and neighborhoods)
//! comes through `GameEngineState`, so any engine that honors the contract can
//! be searched.

use std::error::Error;
use std::fmt;

use crate::game_state::divercite_types::{
    BoardLocation, Inventory, Neighbor, Piece, PlayerId,
};

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    IllegalAction(String),
    InvalidState(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::IllegalAction(msg) => write!(f, "illegal action: {msg}"),
            EngineError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for EngineError {}

/// A legal action together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedAction<S: GameEngineState> {
    pub action: S::Action,
    pub state_after: S,
}

/// Immutable game position as seen by the search.
///
/// Implementations must be value-like: `apply` and `legal_actions` return new
/// states and never mutate `self`, because the search branches over several
/// children of the same parent.
pub trait GameEngineState: Clone + Send + Sync + Sized {
    type Action: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Seats in turn order.
    fn players(&self) -> Vec<PlayerId>;

    fn side_to_move(&self) -> PlayerId;

    fn is_terminal(&self) -> bool;

    /// Full legal move generation for the side to move.
    fn legal_actions(&self) -> EngineResult<Vec<GeneratedAction<Self>>>;

    fn apply(&self, action: &Self::Action) -> EngineResult<Self>;

    fn score(&self, player: PlayerId) -> i32;

    fn remaining_inventory(&self, player: PlayerId) -> Inventory;

    /// Every occupied cell holding a city piece.
    fn city_cells(&self) -> Vec<(BoardLocation, Piece)>;

    /// The four orthogonal neighbors of `location`, including off-board ones.
    fn neighbors(&self, location: BoardLocation) -> [Neighbor; 4];

    fn scores(&self) -> Vec<(PlayerId, i32)> {
        self.players()
            .into_iter()
            .map(|player| (player, self.score(player)))
            .collect()
    }

    /// Upper bound on the plies left in the game: every remaining piece of
    /// every player still has to be placed.
    fn max_remaining_plies(&self) -> u32 {
        self.players()
            .into_iter()
            .map(|player| self.remaining_inventory(player).total())
            .sum()
    }
}
