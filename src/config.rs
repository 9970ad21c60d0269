//! Construction options
//!
//! Every key is optional in JSON; missing keys fall back to the classic
//! 800x600 layout.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Render target size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    pub color: String,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: "#4169e1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub color: String,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            color: "white".to_string(),
        }
    }
}

/// Cell size of the block grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            width: BLOCK_WIDTH,
            height: BLOCK_HEIGHT,
        }
    }
}

/// Everything needed to build a session and its frame loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    /// Tick period in milliseconds
    pub interval: f64,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub block: BlockConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            interval: DEFAULT_INTERVAL_MS,
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            block: BlockConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parse `json`, logging and falling back to defaults if it is malformed
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded game config");
                config
            }
            Err(e) => {
                log::warn!("Invalid game config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Same board, different canvas size
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas = CanvasConfig { width, height };
        self
    }
}
