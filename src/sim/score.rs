//! Score sink: where destroyed blocks report their points

use serde::{Deserialize, Serialize};

/// An external counter the simulation adds points to. Never read back.
pub trait ScoreSink {
    fn add(&mut self, points: u64);
}

impl<F: FnMut(u64)> ScoreSink for F {
    fn add(&mut self, points: u64) {
        self(points)
    }
}

/// Running total shown in the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreSink for Scoreboard {
    fn add(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
        log::debug!("Score +{} -> {}", points, self.score);
    }
}
