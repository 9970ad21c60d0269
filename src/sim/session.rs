//! Game session: owns every entity for the lifetime of one game
//!
//! Replaces process-wide state with an explicit context: board bounds and the
//! game-over latch live on [`Board`], owned here and lent to the paddle and
//! ball when they need it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, TargetSet};
use super::block::BlockGrid;
use super::board::Board;
use super::geometry::{CollisionSide, EntityId, Hittable};
use super::paddle::Paddle;
use super::score::{ScoreSink, Scoreboard};
use crate::config::GameConfig;
use crate::consts::{LAUNCH_DIRECTION_DEG, LAUNCH_SPEED, PADDLE_SPEED_DIVISOR, PADDLE_Y_FRACTION};

/// The paddle and blocks, addressable by entity id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playfield {
    pub paddle: Paddle,
    pub grid: BlockGrid,
}

impl TargetSet for Playfield {
    fn target(&self, id: EntityId) -> Option<&dyn Hittable> {
        if id == self.paddle.id {
            return Some(&self.paddle);
        }
        self.grid.get(id).map(|b| b as &dyn Hittable)
    }

    fn hit(&mut self, id: EntityId, ball: &mut Ball, score: &mut dyn ScoreSink) {
        if id == self.paddle.id {
            self.paddle.hit(ball, score);
        } else {
            self.grid.hit_block(id, ball, score);
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Seed used for the block layout
    pub seed: u64,
    pub board: Board,
    pub field: Playfield,
    pub ball: Ball,
    pub score: Scoreboard,
    /// Frames simulated so far
    pub time_ticks: u64,
    next_id: EntityId,
}

impl Session {
    /// Build a fresh session: paddle near the bottom, stage 1 blocks, ball in
    /// the middle at rest, with the paddle and every block as ball targets.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let board = Board::new(config.canvas.width, config.canvas.height);

        let mut next_id: EntityId = 1;
        let mut paddle = Paddle::new(
            next_id,
            config.paddle.width,
            config.paddle.height,
            config.paddle.color.clone(),
        );
        next_id += 1;
        paddle.set_position(board.width / 2.0, board.height * PADDLE_Y_FRACTION, &board);
        paddle.set_speed(board.width / PADDLE_SPEED_DIVISOR);

        let mut grid = BlockGrid::new(config.block.width, config.block.height);
        let mut rng = Pcg32::seed_from_u64(seed);
        let block_ids = grid.stage1(&mut rng, || {
            let id = next_id;
            next_id += 1;
            id
        });

        let mut ball = Ball::new(config.ball.radius).with_color(config.ball.color.clone());
        ball.set_position(board.width / 2.0, board.height / 2.0);
        ball.add_target(paddle.id);
        ball.add_targets(block_ids);

        log::info!(
            "Session started: board {}x{}, {} blocks, seed {}",
            board.width,
            board.height,
            grid.len(),
            seed
        );

        Self {
            seed,
            board,
            field: Playfield { paddle, grid },
            ball,
            score: Scoreboard::new(),
            time_ticks: 0,
            next_id,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn move_paddle_left(&mut self) {
        self.field.paddle.move_left(&self.board);
    }

    pub fn move_paddle_right(&mut self) {
        self.field.paddle.move_right(&self.board);
    }

    /// Debug hook: send the ball off at the fixed launch speed and direction
    pub fn debug_launch(&mut self) {
        self.ball.set_speed(LAUNCH_SPEED, LAUNCH_DIRECTION_DEG);
        log::debug!("Debug launch: vel={:?}", self.ball.vel);
    }

    /// Advance the ball one tick against the playfield
    pub fn update_ball(&mut self) -> CollisionSide {
        self.update_ball_with(None)
    }

    /// Like [`Session::update_ball`], additionally reporting points to `sink`
    pub fn update_ball_with(&mut self, sink: Option<&mut dyn ScoreSink>) -> CollisionSide {
        let Session {
            board,
            field,
            ball,
            score,
            ..
        } = self;
        match sink {
            Some(extra) => {
                let mut both = |points: u64| {
                    score.add(points);
                    extra.add(points);
                };
                ball.update(field, board, &mut both)
            }
            None => ball.update(field, board, score),
        }
    }
}
