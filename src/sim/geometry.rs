//! Axis-aligned rectangle geometry shared by every hittable entity
//!
//! Screen coordinates: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::score::ScoreSink;

/// Stable identifier for a paddle or block in a session
pub type EntityId = u32;

/// An axis-aligned rectangle described by its center and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center point
    pub center: Vec2,
    /// Full width and height (never negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Corner points in top-left, top-right, bottom-right, bottom-left order
    pub fn corner_points(&self) -> [Vec2; 4] {
        let h = self.half_size();
        let c = self.center;
        [
            Vec2::new(c.x - h.x, c.y - h.y),
            Vec2::new(c.x + h.x, c.y - h.y),
            Vec2::new(c.x + h.x, c.y + h.y),
            Vec2::new(c.x - h.x, c.y + h.y),
        ]
    }
}

/// Which velocity axes to reflect after an impact
///
/// Bit 0 = horizontal (negate dx), bit 1 = vertical (negate dy). Both bits are
/// set when the ball meets a corner at equal depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionSide(u8);

impl CollisionSide {
    pub const NONE: Self = Self(0);
    pub const HORIZONTAL: Self = Self(0b01);
    pub const VERTICAL: Self = Self(0b10);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn horizontal(self) -> bool {
        self.0 & Self::HORIZONTAL.0 != 0
    }

    #[inline]
    pub fn vertical(self) -> bool {
        self.0 & Self::VERTICAL.0 != 0
    }
}

impl std::ops::BitOr for CollisionSide {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CollisionSide {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Anything the ball can collide with
pub trait Hittable {
    fn id(&self) -> EntityId;

    /// Current bounding rectangle
    fn rect(&self) -> Rect;

    fn corner_points(&self) -> [Vec2; 4] {
        self.rect().corner_points()
    }

    /// React to a ball impact. Does nothing unless overridden.
    fn hit(&mut self, _ball: &mut Ball, _score: &mut dyn ScoreSink) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_points_order() {
        let rect = Rect::new(Vec2::new(100.0, 50.0), 40.0, 20.0);
        let [tl, tr, br, bl] = rect.corner_points();
        assert_eq!(tl, Vec2::new(80.0, 40.0));
        assert_eq!(tr, Vec2::new(120.0, 40.0));
        assert_eq!(br, Vec2::new(120.0, 60.0));
        assert_eq!(bl, Vec2::new(80.0, 60.0));
    }

    #[test]
    fn test_negative_size_clamped() {
        let rect = Rect::new(Vec2::ZERO, -5.0, 3.0);
        assert_eq!(rect.size, Vec2::new(0.0, 3.0));
        assert_eq!(rect.left(), rect.right());
    }

    #[test]
    fn test_collision_side_bits() {
        let both = CollisionSide::HORIZONTAL | CollisionSide::VERTICAL;
        assert_eq!(both.bits(), 0b11);
        assert!(both.horizontal() && both.vertical());
        assert!(CollisionSide::NONE.is_none());
        assert!(!CollisionSide::VERTICAL.horizontal());
    }

    struct Wall;

    impl Hittable for Wall {
        fn id(&self) -> EntityId {
            7
        }

        fn rect(&self) -> Rect {
            Rect::new(Vec2::new(10.0, 10.0), 4.0, 4.0)
        }
    }

    #[test]
    fn test_default_hit_is_noop() {
        let mut wall = Wall;
        let mut ball = Ball::new(5.0);
        ball.set_velocity(Vec2::new(1.0, 2.0));
        let mut points = 0u64;
        let mut sink = |p: u64| points += p;
        wall.hit(&mut ball, &mut sink);
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));
        assert_eq!(points, 0);
        assert_eq!(wall.corner_points()[0], Vec2::new(8.0, 8.0));
    }
}
