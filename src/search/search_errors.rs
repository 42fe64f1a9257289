//! Errors raised by the search core.
//!
//! Running out of time is not among them: budget exhaustion is reported as a
//! `None` outcome so the controller can fall back to the previous depth.

use std::error::Error;
use std::fmt;

use crate::game_state::divercite_types::PlayerId;
use crate::game_state::game_engine::EngineError;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The engine offered no action at a position it does not call terminal.
    NoLegalActions { player: PlayerId },
    Engine(EngineError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalActions { player } => write!(
                f,
                "no legal actions for {player} at a non-terminal position"
            ),
            SearchError::Engine(err) => write!(f, "game engine failure: {err}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SearchError::Engine(err) => Some(err),
            SearchError::NoLegalActions { .. } => None,
        }
    }
}

impl From<EngineError> for SearchError {
    fn from(err: EngineError) -> Self {
        SearchError::Engine(err)
    }
}
