//! Crate root module declarations for the Divercite search engine.
//!
//! This file exposes the game-engine contract (plus a reference board and
//! scripted trees that implement it), the search core (evaluation, move
//! ranking, alpha-beta, iterative deepening), the players built on top of
//! it, and text utilities for boards, so tests, benches, and drivers can
//! import stable module paths.

pub mod game_state {
    pub mod divercite_board;
    pub mod divercite_rules;
    pub mod divercite_types;
    pub mod game_engine;
    pub mod synthetic_tree;
}

pub mod search {
    pub mod alpha_beta;
    pub mod evaluation;
    pub mod iterative_deepening;
    pub mod move_ranker;
    pub mod search_budget;
    pub mod search_errors;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod player_session;
    pub mod player_trait;
    pub mod time_management;
}

pub mod utils {
    pub mod board_parser;
    pub mod board_render;
}
