//! Breakout - A classic brick breaker on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, AABB collisions, session state)
//! - `renderer`: Render-surface contract and draw routines
//! - `frame`: Fixed-interval frame controller and keyboard latches
//! - `config`: Construction options with JSON loading

pub mod config;
pub mod frame;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use frame::{FrameController, InputLatches, Key};

/// Game configuration constants
pub mod consts {
    /// Default tick period in milliseconds (60 Hz)
    pub const DEFAULT_INTERVAL_MS: f64 = 1000.0 / 60.0;
    /// Maximum frames run per host callback to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default board (canvas) dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle rests at 8/9 of the board height
    pub const PADDLE_Y_FRACTION: f32 = 8.0 / 9.0;
    /// Paddle moves board width / this many pixels per tick
    pub const PADDLE_SPEED_DIVISOR: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Debug launch: speed (px/tick) and direction (degrees)
    pub const LAUNCH_SPEED: f32 = 5.0;
    pub const LAUNCH_DIRECTION_DEG: f32 = 135.0;

    /// Paddle-hit deflection step (degrees)
    pub const ANGLE_STEP_DEG: f32 = 5.0;
    /// Deflected angles at or beyond these bounds are rejected (radians).
    /// Asymmetric on purpose: -45 degrees and +30 degrees.
    pub const ANGLE_MIN: f32 = -std::f32::consts::FRAC_PI_4;
    pub const ANGLE_MAX: f32 = std::f32::consts::FRAC_PI_6;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const GRID_COLUMNS: u32 = 7;
    pub const GRID_ROWS: u32 = 6;
    /// Points awarded per destroyed block
    pub const BLOCK_SCORE: u64 = 1000;

    /// Stroke width of the block outline
    pub const BLOCK_STROKE_WIDTH: f32 = 4.0;
}
