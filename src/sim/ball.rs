//! The ball: motion integration, AABB collision scan, wall handling
//!
//! Per tick, while the game is running:
//! 1. integrate position by velocity
//! 2. scan the target list, resolving at most one impact (first match wins)
//! 3. reflect velocity on the axes reported by the collision side mask
//! 4. keep the ball inside the left/top/right walls; falling past the bottom
//!    latches game over

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::geometry::{CollisionSide, EntityId, Hittable};
use super::score::ScoreSink;
use crate::consts::{ANGLE_MAX, ANGLE_MIN, ANGLE_STEP_DEG, BALL_RADIUS};

/// Direction of a paddle-induced angle nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Adds to the angle (steeper to the right on screen)
    Clockwise,
    /// Subtracts from the angle
    CounterClockwise,
}

/// Resolves target ids to live hittable objects
pub trait TargetSet {
    fn target(&self, id: EntityId) -> Option<&dyn Hittable>;

    /// Deliver an impact to the target with `id`
    fn hit(&mut self, id: EntityId, ball: &mut Ball, score: &mut dyn ScoreSink);
}

impl TargetSet for Vec<Box<dyn Hittable>> {
    fn target(&self, id: EntityId) -> Option<&dyn Hittable> {
        self.iter().find(|t| t.id() == id).map(|t| t.as_ref())
    }

    fn hit(&mut self, id: EntityId, ball: &mut Ball, score: &mut dyn ScoreSink) {
        if let Some(target) = self.iter_mut().find(|t| t.id() == id) {
            target.hit(ball, score);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: String,
    /// Ids tested for collision every tick, in scan order
    targets: Vec<EntityId>,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: radius.max(0.0),
            color: "white".to_string(),
            targets: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    /// Set velocity from a speed (px/tick) and a direction in degrees
    pub fn set_speed(&mut self, speed: f32, direction_deg: f32) {
        let rad = direction_deg.to_radians();
        self.vel = Vec2::new(rad.cos() * speed, rad.sin() * speed);
    }

    pub fn targets(&self) -> &[EntityId] {
        &self.targets
    }

    pub fn add_target(&mut self, id: EntityId) {
        self.targets.push(id);
    }

    pub fn add_targets(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        self.targets.extend(ids);
    }

    /// Stop testing against `id`. Ids not in the list are ignored.
    pub fn remove_target(&mut self, id: EntityId) {
        if let Some(index) = self.targets.iter().position(|&t| t == id) {
            self.targets.remove(index);
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Run one full tick. Does nothing once the game is over.
    pub fn update(
        &mut self,
        targets: &mut dyn TargetSet,
        board: &mut Board,
        score: &mut dyn ScoreSink,
    ) -> CollisionSide {
        if board.is_game_over() {
            return CollisionSide::NONE;
        }
        let side = self.step(targets, score);
        self.fix_position(board);
        side
    }

    /// Integrate, resolve one collision and reflect
    pub fn step(&mut self, targets: &mut dyn TargetSet, score: &mut dyn ScoreSink) -> CollisionSide {
        self.pos += self.vel;

        let side = self.collision(targets, score);
        self.reflect(side);
        side
    }

    pub fn reflect(&mut self, side: CollisionSide) {
        if side.horizontal() {
            self.vel.x = -self.vel.x;
        }
        if side.vertical() {
            self.vel.y = -self.vel.y;
        }
    }

    /// Find the first target overlapping the ball's bounding square, hit it
    /// and classify the impact by the shallowest penetration depth.
    pub fn collision(
        &mut self,
        targets: &mut dyn TargetSet,
        score: &mut dyn ScoreSink,
    ) -> CollisionSide {
        let (bl, br, bt, bb) = (self.left(), self.right(), self.top(), self.bottom());

        for index in 0..self.targets.len() {
            let id = self.targets[index];
            let Some(points) = targets.target(id).map(|t| t.corner_points()) else {
                continue;
            };

            let overlaps = points[0].x < br
                && bl < points[1].x
                && points[0].y < bb
                && bt < points[2].y;
            if !overlaps {
                continue;
            }

            targets.hit(id, self, score);

            let dl = (points[0].x - br).abs();
            let dt = (points[0].y - bb).abs();
            let dr = (points[1].x - bl).abs();
            let db = (points[2].y - bt).abs();
            let min = dl.min(dt).min(dr).min(db);

            let mut side = CollisionSide::NONE;
            if min == dl || min == dr {
                side |= CollisionSide::HORIZONTAL;
            }
            if min == dt || min == db {
                side |= CollisionSide::VERTICAL;
            }
            log::trace!("Ball hit target {} side={:#04b}", id, side.bits());
            return side;
        }

        CollisionSide::NONE
    }

    /// Nudge the travel angle by five degrees.
    ///
    /// The change is dropped when the new angle would reach -45 or +30
    /// degrees, or when `dx` is zero and the angle is undefined.
    pub fn change_angle(&mut self, rotation: Rotation) {
        if self.vel.x == 0.0 {
            return;
        }
        let theta = (self.vel.y / self.vel.x).atan();
        // Signed: keeps the horizontal direction of travel
        let speed = self.vel.x / theta.cos();

        let step = ANGLE_STEP_DEG.to_radians();
        let theta = match rotation {
            Rotation::Clockwise => theta + step,
            Rotation::CounterClockwise => theta - step,
        };
        if theta <= ANGLE_MIN || theta >= ANGLE_MAX {
            return;
        }
        self.vel = Vec2::new(theta.cos() * speed, theta.sin() * speed);
    }

    /// Keep the ball inside the left, top and right walls.
    ///
    /// The bottom check compares the ball's top edge with the board height,
    /// so the ball is fully out of view before the game ends. No position
    /// correction happens on that path.
    pub fn fix_position(&mut self, board: &mut Board) {
        let left = self.left();
        if left < 0.0 {
            self.pos.x -= left;
            self.vel.x = -self.vel.x;
        }

        let top = self.top();
        if top < 0.0 {
            self.pos.y -= top;
            self.vel.y = -self.vel.y;
        }

        let right = self.right();
        if right > board.width {
            self.pos.x -= right - board.width;
            self.vel.x = -self.vel.x;
        }

        if top > board.height {
            board.set_game_over();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::Block;
    use crate::sim::geometry::Rect;
    use crate::sim::paddle::Paddle;
    use crate::sim::score::Scoreboard;
    use proptest::prelude::*;

    fn boxed<T: Hittable + 'static>(target: T) -> Box<dyn Hittable> {
        Box::new(target)
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(5.0);
        ball.set_position(x, y);
        ball.set_velocity(vel);
        ball
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut board = Board::new(400.0, 300.0);
        let mut ball = ball_at(2.0, 100.0, Vec2::new(-3.0, 0.0));
        ball.fix_position(&mut board);
        assert_eq!(ball.pos.x, 5.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 0.0));
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_top_and_right_walls() {
        let mut board = Board::new(400.0, 300.0);
        let mut ball = ball_at(398.0, 1.0, Vec2::new(2.0, -2.0));
        ball.fix_position(&mut board);
        assert_eq!(ball.pos, Vec2::new(395.0, 5.0));
        assert_eq!(ball.vel, Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_game_over_freezes_ball() {
        let mut board = Board::new(400.0, 300.0);
        let mut targets: Vec<Box<dyn Hittable>> = Vec::new();
        let mut score = Scoreboard::new();
        let mut ball = ball_at(200.0, 304.0, Vec2::new(0.0, 3.0));

        ball.update(&mut targets, &mut board, &mut score);
        assert!(board.is_game_over());

        let frozen = ball.pos;
        for _ in 0..5 {
            ball.update(&mut targets, &mut board, &mut score);
        }
        assert_eq!(ball.pos, frozen);
    }

    #[test]
    fn test_bottom_check_uses_top_edge() {
        // Bottom edge past the board but top edge still inside: play goes on
        let mut board = Board::new(400.0, 300.0);
        let mut ball = ball_at(200.0, 302.0, Vec2::new(0.0, 1.0));
        ball.fix_position(&mut board);
        assert!(!board.is_game_over());
        assert_eq!(ball.pos.y, 302.0);

        ball.set_position(200.0, 306.0);
        ball.fix_position(&mut board);
        assert!(board.is_game_over());
        assert_eq!(ball.pos.y, 306.0);
    }

    #[test]
    fn test_horizontal_approach_flips_dx_only() {
        let mut targets: Vec<Box<dyn Hittable>> = vec![boxed(Block::new(9, Vec2::new(100.0, 100.0), 80.0, 20.0, 0))];
        let mut score = Scoreboard::new();
        let mut ball = ball_at(57.0, 100.0, Vec2::new(5.0, 0.0));
        ball.add_target(9);

        let side = ball.step(&mut targets, &mut score);
        assert_eq!(side, CollisionSide::HORIZONTAL);
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
        assert!(ball.targets().is_empty());
        assert_eq!(score.score, 1000);
    }

    #[test]
    fn test_vertical_approach_flips_dy_only() {
        let mut targets: Vec<Box<dyn Hittable>> = vec![boxed(Block::new(3, Vec2::new(100.0, 100.0), 80.0, 20.0, 0))];
        let mut score = Scoreboard::new();
        let mut ball = ball_at(100.0, 118.0, Vec2::new(0.0, -4.0));
        ball.add_target(3);

        let side = ball.step(&mut targets, &mut score);
        assert_eq!(side, CollisionSide::VERTICAL);
        assert_eq!(ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_first_match_wins() {
        let mut targets: Vec<Box<dyn Hittable>> = vec![
            boxed(Block::new(1, Vec2::new(100.0, 100.0), 80.0, 20.0, 0)),
            boxed(Block::new(2, Vec2::new(100.0, 100.0), 80.0, 20.0, 0)),
        ];
        let mut score = Scoreboard::new();
        let mut ball = ball_at(100.0, 118.0, Vec2::new(0.0, -4.0));
        ball.add_targets([2, 1]);

        ball.step(&mut targets, &mut score);
        assert_eq!(ball.targets(), &[1]);
        assert_eq!(score.score, 1000);
    }

    #[test]
    fn test_no_overlap_no_hit() {
        let mut targets: Vec<Box<dyn Hittable>> = vec![boxed(Block::new(1, Vec2::new(100.0, 100.0), 80.0, 20.0, 0))];
        let mut score = Scoreboard::new();
        let mut ball = ball_at(300.0, 300.0, Vec2::new(1.0, 1.0));
        ball.add_target(1);

        let side = ball.step(&mut targets, &mut score);
        assert!(side.is_none());
        assert_eq!(ball.pos, Vec2::new(301.0, 301.0));
        assert_eq!(ball.targets(), &[1]);
    }

    #[test]
    fn test_paddle_stays_a_target() {
        let board = Board::new(800.0, 600.0);
        let mut paddle = Paddle::new(1, 100.0, 10.0, "royalblue");
        paddle.set_position(400.0, 533.0, &board);
        let mut targets: Vec<Box<dyn Hittable>> = vec![boxed(paddle)];
        let mut score = Scoreboard::new();
        let mut ball = ball_at(400.0, 520.0, Vec2::new(0.0, 4.0));
        ball.add_target(1);

        let side = ball.step(&mut targets, &mut score);
        assert!(side.vertical());
        assert_eq!(ball.vel, Vec2::new(0.0, -4.0));
        assert_eq!(ball.targets(), &[1]);
        assert_eq!(score.score, 0);
    }

    #[test]
    fn test_corner_hit_sets_both_bits() {
        // Equal depths on the left and top sides
        struct Square;
        impl Hittable for Square {
            fn id(&self) -> EntityId {
                4
            }
            fn rect(&self) -> Rect {
                Rect::new(Vec2::new(50.0, 50.0), 20.0, 20.0)
            }
        }
        let mut targets: Vec<Box<dyn Hittable>> = vec![boxed(Square)];
        let mut score = Scoreboard::new();
        let mut ball = ball_at(34.0, 34.0, Vec2::new(2.0, 2.0));
        ball.add_target(4);

        let side = ball.step(&mut targets, &mut score);
        assert_eq!(side.bits(), 0b11);
        assert_eq!(ball.vel, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_remove_target_non_member() {
        let mut ball = Ball::new(5.0);
        ball.add_targets(vec![1, 2, 3]);
        ball.remove_target(42);
        ball.remove_target(2);
        ball.remove_target(2);
        assert_eq!(ball.targets(), &[1, 3]);
    }

    #[test]
    fn test_set_speed_debug_launch() {
        let mut ball = Ball::new(5.0);
        ball.set_speed(5.0, 135.0);
        assert!((ball.vel.x + 3.5355).abs() < 1e-3);
        assert!((ball.vel.y - 3.5355).abs() < 1e-3);
    }

    #[test]
    fn test_change_angle_keeps_speed() {
        let mut ball = ball_at(0.0, 0.0, Vec2::new(3.0, 4.0));
        let speed = ball.vel.length();
        ball.change_angle(Rotation::CounterClockwise);
        assert!((ball.vel.length() - speed).abs() < 1e-4);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_change_angle_keeps_leftward_travel() {
        let mut ball = ball_at(0.0, 0.0, Vec2::new(-4.0, -1.0));
        ball.change_angle(Rotation::Clockwise);
        assert!(ball.vel.x < 0.0);
        assert!((ball.vel.length() - Vec2::new(-4.0, -1.0).length()).abs() < 1e-4);
    }

    #[test]
    fn test_change_angle_zero_dx_is_noop() {
        let mut ball = ball_at(0.0, 0.0, Vec2::new(0.0, 5.0));
        ball.change_angle(Rotation::Clockwise);
        ball.change_angle(Rotation::CounterClockwise);
        assert_eq!(ball.vel, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_clockwise_stops_at_upper_bound() {
        let mut ball = ball_at(0.0, 0.0, Vec2::new(5.0, 0.0));
        for _ in 0..20 {
            ball.change_angle(Rotation::Clockwise);
        }
        let settled = ball.vel;
        let angle = (settled.y / settled.x).atan().to_degrees();
        assert!(angle < 30.0 + 1e-3 && angle > 20.0);

        ball.change_angle(Rotation::Clockwise);
        assert_eq!(ball.vel, settled);
    }

    #[test]
    fn test_counter_clockwise_stops_at_lower_bound() {
        let mut ball = ball_at(0.0, 0.0, Vec2::new(5.0, 0.0));
        for _ in 0..20 {
            ball.change_angle(Rotation::CounterClockwise);
        }
        let settled = ball.vel;
        let angle = (settled.y / settled.x).atan().to_degrees();
        assert!(angle > -45.0 - 1e-3 && angle < -35.0);

        ball.change_angle(Rotation::CounterClockwise);
        assert_eq!(ball.vel, settled);
    }

    proptest! {
        #[test]
        fn prop_walls_contain_ball(
            x in -50.0f32..450.0,
            y in 0.0f32..280.0,
            dx in -20.0f32..20.0,
            dy in -20.0f32..20.0,
        ) {
            let mut board = Board::new(400.0, 300.0);
            let mut ball = ball_at(x, y, Vec2::new(dx, dy));
            ball.fix_position(&mut board);
            prop_assert!(ball.left() >= -1e-3);
            prop_assert!(ball.right() <= 400.0 + 1e-3);
            prop_assert!(ball.top() >= -1e-3);
            prop_assert!(!board.is_game_over());
        }
    }
}
