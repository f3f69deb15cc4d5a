// Sprite draw requests and the batch that turns them into GPU instances

use glam::Vec2;
use log::warn;

use super::{Renderer, SpriteInstance};
use crate::engine::assets::{SheetId, SheetRegistry};

/// A request to draw one sprite-sheet frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub sheet: SheetId,
    /// Frame index on the sheet
    pub frame: u32,
    /// Top-left corner in screen pixels
    pub position: Vec2,
    /// Size in screen pixels
    pub size: Vec2,
    /// Z-order for layering (higher = drawn on top)
    pub z_order: f32,
}

impl Sprite {
    /// Create a new sprite
    pub fn new(sheet: SheetId, frame: u32, position: Vec2, size: Vec2) -> Self {
        Self {
            sheet,
            frame,
            position,
            size,
            z_order: 0.0,
        }
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = z_order;
        self
    }
}

/// Collects one frame's sprites as instance data ready for upload.
///
/// Sprites whose sheet or frame is unknown are logged and dropped.
#[derive(Debug)]
pub struct SpriteBatch {
    sheets: SheetRegistry,
    instances: Vec<SpriteInstance>,
}

impl SpriteBatch {
    pub fn new(sheets: SheetRegistry) -> Self {
        Self {
            sheets,
            instances: Vec::new(),
        }
    }

    pub fn sheets(&self) -> &SheetRegistry {
        &self.sheets
    }

    /// Clear all sprites
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Instances ordered back to front
    pub fn instances(&mut self) -> &[SpriteInstance] {
        self.instances.sort_by(|a, b| a.z_order.total_cmp(&b.z_order));
        &self.instances
    }
}

impl Renderer for SpriteBatch {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        match self.sheets.region(sprite.sheet, sprite.frame) {
            Ok(region) => self.instances.push(SpriteInstance::new(
                sprite.position,
                sprite.size,
                &region,
                sprite.z_order,
            )),
            Err(e) => warn!("Skipping sprite: {}", e),
        }
    }
}
