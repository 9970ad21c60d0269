//! Session context: board bounds and the terminal game-over flag

use serde::{Deserialize, Serialize};

/// Playfield bounds plus the one-way game-over latch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    game_over: bool,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            game_over: false,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Latch game over. There is no way to clear it within a session.
    pub fn set_game_over(&mut self) {
        if !self.game_over {
            log::info!("Game over");
        }
        self.game_over = true;
    }
}
