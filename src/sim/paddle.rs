//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Rotation};
use super::board::Board;
use super::geometry::{EntityId, Hittable, Rect};
use super::score::ScoreSink;

/// Horizontally mobile rectangle at the bottom of the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub id: EntityId,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick while a direction key is held
    pub speed: f32,
    pub color: String,
}

impl Paddle {
    pub fn new(id: EntityId, width: f32, height: f32, color: impl Into<String>) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            width: width.max(0.0),
            height: height.max(0.0),
            speed: 0.0,
            color: color.into(),
        }
    }

    /// Place the paddle, keeping it on the board
    pub fn set_position(&mut self, x: f32, y: f32, board: &Board) {
        self.pos = Vec2::new(x, y);
        self.fix_position(board);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn move_left(&mut self, board: &Board) {
        self.pos.x -= self.speed;
        self.fix_position(board);
    }

    pub fn move_right(&mut self, board: &Board) {
        self.pos.x += self.speed;
        self.fix_position(board);
    }

    /// Push the paddle back inside `[0, board.width]`
    fn fix_position(&mut self, board: &Board) {
        let left = self.pos.x - self.width / 2.0;
        if left < 0.0 {
            self.pos.x -= left;
        }

        let right = self.pos.x + self.width / 2.0;
        if right > board.width {
            self.pos.x -= right - board.width;
        }
    }
}

impl Hittable for Paddle {
    fn id(&self) -> EntityId {
        self.id
    }

    fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Outer quarters nudge the ball's angle; the middle half leaves it alone
    fn hit(&mut self, ball: &mut Ball, _score: &mut dyn ScoreSink) {
        let quarter = self.width / 4.0;
        if ball.pos.x > self.pos.x + quarter {
            ball.change_angle(Rotation::Clockwise);
        } else if ball.pos.x < self.pos.x - quarter {
            ball.change_angle(Rotation::CounterClockwise);
        }
    }
}
