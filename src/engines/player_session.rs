//! Per-game player state that outlives a single move.

/// Lives for one game: reset at game start, updated after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSession {
    first_move_pending: bool,
    moves_played: u32,
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerSession {
    pub const fn new() -> Self {
        Self {
            first_move_pending: true,
            moves_played: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn is_first_move(&self) -> bool {
        self.first_move_pending
    }

    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn record_move(&mut self) {
        self.first_move_pending = false;
        self.moves_played = self.moves_played.saturating_add(1);
    }
}
