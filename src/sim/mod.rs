//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable scan order (ball target list order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod board;
pub mod geometry;
pub mod paddle;
pub mod score;
pub mod session;
pub mod tick;

pub use ball::{Ball, Rotation, TargetSet};
pub use block::{Block, BlockGrid, ColorPair, Palette};
pub use board::Board;
pub use geometry::{CollisionSide, EntityId, Hittable, Rect};
pub use paddle::Paddle;
pub use score::{ScoreSink, Scoreboard};
pub use session::{Playfield, Session};
pub use tick::{TickInput, tick};
