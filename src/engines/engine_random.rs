//! Uniform random baseline player.
//!
//! Picks any legal action. Useful as a sparring partner and for smoke tests
//! that drive whole games through the `Player` trait.

use std::time::Duration;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::player_trait::{Player, PlayerOutput};
use crate::game_state::game_engine::GameEngineState;

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameEngineState> Player<S> for RandomPlayer {
    fn name(&self) -> &str {
        "Divercite Random"
    }

    fn choose_action(
        &mut self,
        game_state: &S,
        _remaining_time: Duration,
    ) -> Result<PlayerOutput<S::Action>, String> {
        let legal_actions = game_state.legal_actions().map_err(|e| e.to_string())?;

        let picked = legal_actions
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("no legal action to choose from")?;

        let mut out = PlayerOutput::new(picked.action.clone());
        out.info_lines.push(format!(
            "info string random_player legal_actions {}",
            legal_actions.len()
        ));
        Ok(out)
    }
}
