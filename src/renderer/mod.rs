//! 2D canvas rendering
//!
//! The simulation never touches a real canvas: it issues calls against the
//! [`RenderSurface`] contract. The browser build implements it on a 2D context;
//! [`CommandBuffer`] records the calls for headless runs and tests.

pub mod commands;
pub mod draw;

pub use commands::{CommandBuffer, DrawCommand};
pub use draw::{draw_ball, draw_block, draw_frame, draw_game_over, draw_paddle};

use glam::Vec2;

use crate::sim::Rect;

/// The only drawing primitives the game needs
pub trait RenderSurface {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    /// Draw `text` centered horizontally on `pos`
    fn fill_text_centered(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}
