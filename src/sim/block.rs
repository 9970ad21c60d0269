//! Destructible blocks and the grid that owns them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::{EntityId, Hittable, Rect};
use super::score::ScoreSink;
use crate::consts::{BLOCK_SCORE, GRID_COLUMNS, GRID_ROWS};

/// Fill and outline colors for a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// The fixed sixteen-entry two-tone block palette
pub struct Palette;

impl Palette {
    pub const COLORS: [ColorPair; 16] = [
        ColorPair { fill: "Pink", stroke: "Crimson" },
        ColorPair { fill: "HotPink", stroke: "DeepPink" },
        ColorPair { fill: "Violet", stroke: "Magenta" },
        ColorPair { fill: "MediumOrchid", stroke: "DarkOrchid" },
        ColorPair { fill: "MediumSlateBlue", stroke: "DarkSlateBlue" },
        ColorPair { fill: "Blue", stroke: "MidnightBlue" },
        ColorPair { fill: "LightSkyBlue", stroke: "DeepSkyBlue" },
        ColorPair { fill: "Cyan", stroke: "DarkCyan" },
        ColorPair { fill: "MediumAquamarine", stroke: "MediumSpringGreen" },
        ColorPair { fill: "SpringGreen", stroke: "SeaGreen" },
        ColorPair { fill: "DarkGreen", stroke: "LawnGreen" },
        ColorPair { fill: "Yellow", stroke: "Olive" },
        ColorPair { fill: "Gold", stroke: "DarkGoldenrod" },
        ColorPair { fill: "Orange", stroke: "DarkOrange" },
        ColorPair { fill: "Coral", stroke: "OrangeRed" },
        ColorPair { fill: "Red", stroke: "DarkRed" },
    ];

    pub const fn len() -> usize {
        Self::COLORS.len()
    }

    /// Clamp an index into the palette. Anything past the end maps to the last entry.
    pub fn clamp_index(index: usize) -> usize {
        index.min(Self::COLORS.len() - 1)
    }

    pub fn pair(index: usize) -> ColorPair {
        Self::COLORS[Self::clamp_index(index)]
    }
}

/// A single block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: EntityId,
    pub rect: Rect,
    /// Palette index, already clamped
    pub color: usize,
    destroyed: bool,
}

impl Block {
    pub fn new(id: EntityId, center: Vec2, width: f32, height: f32, color: usize) -> Self {
        Self {
            id,
            rect: Rect::new(center, width, height),
            color: Palette::clamp_index(color),
            destroyed: false,
        }
    }

    pub fn colors(&self) -> ColorPair {
        Palette::pair(self.color)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Hittable for Block {
    fn id(&self) -> EntityId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    /// alive -> destroyed, exactly once
    fn hit(&mut self, ball: &mut Ball, score: &mut dyn ScoreSink) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        ball.remove_target(self.id);
        score.add(BLOCK_SCORE);
        log::debug!("Block {} destroyed", self.id);
    }
}

/// Owns every block on the board
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockGrid {
    /// Cell size used for layouts
    pub base_width: f32,
    pub base_height: f32,
    blocks: Vec<Block>,
}

impl BlockGrid {
    pub fn new(base_width: f32, base_height: f32) -> Self {
        Self {
            base_width,
            base_height,
            blocks: Vec::new(),
        }
    }

    /// Lay out the first stage: a 7x6 grid with a one-cell margin from the
    /// top-left corner and a random palette entry per block.
    ///
    /// `next_id` hands out entity ids; the new ids are returned in layout order.
    pub fn stage1<R: Rng>(
        &mut self,
        rng: &mut R,
        mut next_id: impl FnMut() -> EntityId,
    ) -> Vec<EntityId> {
        let mut ids = Vec::with_capacity((GRID_COLUMNS * GRID_ROWS) as usize);
        for col in 0..GRID_COLUMNS {
            for row in 0..GRID_ROWS {
                let center = Vec2::new(
                    self.base_width * (col + 1) as f32,
                    self.base_height * (row + 1) as f32,
                );
                let color = rng.random_range(0..Palette::len());
                let id = next_id();
                self.blocks.push(Block::new(
                    id,
                    center,
                    self.base_width,
                    self.base_height,
                    color,
                ));
                ids.push(id);
            }
        }
        log::info!("Stage 1 laid out: {} blocks", ids.len());
        ids
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: EntityId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Drop a block from the grid. Unknown ids are ignored.
    pub fn remove(&mut self, id: EntityId) -> Option<Block> {
        let index = self.blocks.iter().position(|b| b.id == id)?;
        Some(self.blocks.remove(index))
    }

    /// Route a ball impact to the block with `id`; a destroyed block leaves
    /// the grid. Hitting a block that is already gone does nothing.
    pub fn hit_block(&mut self, id: EntityId, ball: &mut Ball, score: &mut dyn ScoreSink) {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            return;
        };
        block.hit(ball, score);
        if block.is_destroyed() {
            self.remove(id);
            if self.blocks.is_empty() {
                log::info!("All blocks cleared");
            }
        }
    }
}
