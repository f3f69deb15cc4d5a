// Scene: characters, camera and the sprite batch they draw into

use std::time::Duration;

use glam::Vec2;

use crate::engine::assets::{AtlasError, SheetRegistry, SpriteSheet};
use crate::engine::renderer::{Camera, SpriteBatch, SpriteInstance};

use super::characters::profile::{PEASANT_SHEET, RULER_HIGHLIGHT_SHEET, RULER_SHEET};
use super::characters::{CharacterId, CharacterManager, CharacterProfile, ConfigError, DirectionalInput};

/// Frame size on the shipped character sheets
const SHEET_FRAME_SIZE: u32 = 48;

/// Layout of the sprite sheets the shipped characters index into
pub fn character_sheets() -> Result<SheetRegistry, AtlasError> {
    let grid = |id, columns, rows| {
        SpriteSheet::new(id, SHEET_FRAME_SIZE, SHEET_FRAME_SIZE, columns, rows)
    };

    Ok(SheetRegistry::new()
        .with_sheet(grid(RULER_SHEET, 8, 3)?)
        .with_sheet(grid(RULER_HIGHLIGHT_SHEET, 8, 6)?)
        .with_sheet(grid(PEASANT_SHEET, 8, 4)?))
}

pub struct Scene {
    characters: CharacterManager,
    camera: Camera,
    batch: SpriteBatch,
}

impl Scene {
    pub fn new(sheets: SheetRegistry, viewport: Vec2) -> Self {
        Self {
            characters: CharacterManager::new(),
            camera: Camera::new(Vec2::ZERO, viewport.x, viewport.y),
            batch: SpriteBatch::new(sheets),
        }
    }

    /// Spawn a character after checking its frames exist on the loaded sheets
    pub fn spawn(&mut self, profile: CharacterProfile, position: Vec2) -> Result<CharacterId, ConfigError> {
        profile.validate_against(self.batch.sheets())?;
        self.characters.spawn(profile, position)
    }

    /// Run one simulation tick
    pub fn tick<I>(&mut self, input: &I, cursor_screen: Vec2, now: Duration)
    where
        I: DirectionalInput + ?Sized,
    {
        let cursor_world = self.camera.cursor_to_world(cursor_screen);
        self.characters.update(input, cursor_world, now);
    }

    /// Rebuild the sprite batch for this frame
    pub fn render(&mut self) -> &[SpriteInstance] {
        self.batch.clear();
        self.characters.draw(&self.camera, &mut self.batch);
        self.batch.instances()
    }

    pub fn characters(&self) -> &CharacterManager {
        &self.characters
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}
