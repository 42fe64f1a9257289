//! Player abstraction used by game drivers.
//!
//! Different strategies (search, random baseline) sit behind one trait so a
//! driver can pick one at runtime and call it once per turn.

use std::time::Duration;

use crate::game_state::game_engine::GameEngineState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOutput<A> {
    pub action: A,
    pub info_lines: Vec<String>,
}

impl<A> PlayerOutput<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            info_lines: Vec::new(),
        }
    }
}

pub trait Player<S: GameEngineState>: Send {
    fn name(&self) -> &str;

    /// Forget everything carried over from a previous game.
    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Pick a legal action for the side to move within `remaining_time`.
    fn choose_action(
        &mut self,
        game_state: &S,
        remaining_time: Duration,
    ) -> Result<PlayerOutput<S::Action>, String>;
}
