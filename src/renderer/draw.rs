//! Draw routines for each game element

use glam::Vec2;

use super::RenderSurface;
use crate::consts::BLOCK_STROKE_WIDTH;
use crate::sim::{Ball, Block, Hittable, Paddle, Rect, Session};

pub const GAME_OVER_TEXT: &str = "GameOver";
pub const GAME_OVER_FONT: &str = "48pt Arial";
pub const GAME_OVER_COLOR: &str = "red";

pub fn draw_paddle(surface: &mut dyn RenderSurface, paddle: &Paddle) {
    surface.fill_rect(paddle.rect(), &paddle.color);
}

/// Filled body plus an outline inset by half the stroke width
pub fn draw_block(surface: &mut dyn RenderSurface, block: &Block) {
    let colors = block.colors();
    surface.fill_rect(block.rect, colors.fill);

    let inset = Rect::new(
        block.rect.center,
        block.rect.size.x - BLOCK_STROKE_WIDTH,
        block.rect.size.y - BLOCK_STROKE_WIDTH,
    );
    surface.stroke_rect(inset, colors.stroke, BLOCK_STROKE_WIDTH);
}

pub fn draw_ball(surface: &mut dyn RenderSurface, ball: &Ball) {
    surface.fill_circle(ball.pos, ball.radius, &ball.color);
}

pub fn draw_game_over(surface: &mut dyn RenderSurface, width: f32, height: f32) {
    surface.fill_text_centered(
        GAME_OVER_TEXT,
        Vec2::new(width / 2.0, height / 2.0),
        GAME_OVER_FONT,
        GAME_OVER_COLOR,
    );
}

/// Draw a full frame: clear, ball (or the game-over banner), paddle, blocks
pub fn draw_frame(surface: &mut dyn RenderSurface, session: &Session) {
    let board = &session.board;
    surface.clear(board.width, board.height);

    if board.is_game_over() {
        draw_game_over(surface, board.width, board.height);
    } else {
        draw_ball(surface, &session.ball);
    }

    draw_paddle(surface, &session.field.paddle);

    for block in session.field.grid.blocks() {
        draw_block(surface, block);
    }
}
