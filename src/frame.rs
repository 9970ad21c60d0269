//! Frame controller: keyboard latches, fixed-interval stepping, drawing
//!
//! Hosts (the browser timer, the headless runner) feed key events and elapsed
//! time; the controller turns them into whole simulation frames.

use crate::config::GameConfig;
use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{RenderSurface, draw_frame};
use crate::sim::{ScoreSink, Session, TickInput, tick};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Debug: launch the ball
    Launch,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Launch),
            _ => None,
        }
    }
}

/// Held-key state, read once per frame
#[derive(Debug, Clone, Default)]
pub struct InputLatches {
    pub left: bool,
    pub right: bool,
    /// One-shot: cleared when consumed
    launch: bool,
}

impl InputLatches {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Launch => self.launch = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Launch => {}
        }
    }

    /// Snapshot for the next tick, consuming any pending launch
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            launch: std::mem::take(&mut self.launch),
        }
    }
}

/// Drives one session at a fixed frame interval
pub struct FrameController {
    session: Session,
    pub input: InputLatches,
    interval_ms: f64,
    accumulator: f64,
    display: Option<Box<dyn ScoreSink>>,
}

impl FrameController {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            session: Session::new(config, seed),
            input: InputLatches::default(),
            interval_ms: config.interval.max(1.0),
            accumulator: 0.0,
            display: None,
        }
    }

    /// Forward every point scored to an external display as well
    pub fn with_score_display(mut self, display: Box<dyn ScoreSink>) -> Self {
        self.display = Some(display);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Simulate and draw exactly one frame
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) {
        let input = self.input.take_tick_input();
        let was_over = self.session.is_game_over();

        let display = self
            .display
            .as_mut()
            .map(|d| d.as_mut() as &mut dyn ScoreSink);
        tick(&mut self.session, &input, display);
        draw_frame(surface, &self.session);

        if !was_over && self.session.is_game_over() {
            log::info!(
                "Final score {} after {} frames",
                self.session.score.score,
                self.session.time_ticks
            );
        }
    }

    /// Feed wall-clock time; runs as many whole frames as have elapsed, capped
    /// at `MAX_SUBSTEPS`. Returns the number of frames run.
    pub fn advance(&mut self, elapsed_ms: f64, surface: &mut dyn RenderSurface) -> u32 {
        self.accumulator += elapsed_ms.max(0.0);

        let mut frames = 0;
        while self.accumulator >= self.interval_ms && frames < MAX_SUBSTEPS {
            self.frame(surface);
            self.accumulator -= self.interval_ms;
            frames += 1;
        }
        if frames == MAX_SUBSTEPS {
            // Drop the backlog rather than fast-forwarding
            self.accumulator = self.accumulator.min(self.interval_ms);
        }
        frames
    }
}
