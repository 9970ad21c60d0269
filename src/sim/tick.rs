//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one frame.

use super::geometry::CollisionSide;
use super::score::ScoreSink;
use super::session::Session;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Debug: launch the ball at the fixed speed/direction
    pub launch: bool,
}

/// Advance the session by one frame.
///
/// Paddle moves are applied first (left, then right), then the debug launch,
/// then the ball update, which is skipped entirely once the game is over.
/// Points earned this tick are also forwarded to `display` when given.
pub fn tick(
    session: &mut Session,
    input: &TickInput,
    display: Option<&mut dyn ScoreSink>,
) -> CollisionSide {
    session.time_ticks += 1;

    if input.left {
        session.move_paddle_left();
    }
    if input.right {
        session.move_paddle_right();
    }

    if session.is_game_over() {
        return CollisionSide::NONE;
    }

    if input.launch {
        session.debug_launch();
    }

    session.update_ball_with(display)
}
